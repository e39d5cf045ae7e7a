use tracing::debug;

use crate::ui::message::Page;

/// Opaque "show page X" capability handed to selection handlers.
pub trait Navigator {
    fn navigate(&mut self, page: Page);
}

pub struct Router {
    pub stack: Vec<Page>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self {
            stack: vec![Page::Main],
        }
    }

    pub fn push(&mut self, page: Page) {
        self.stack.push(page);
    }

    /// Goes back one page. The main page is never popped.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Page {
        self.stack.last().copied().unwrap_or_default()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, page: Page) {
        debug!(?page, depth = self.stack.len(), "navigate");
        self.push(page);
    }
}
