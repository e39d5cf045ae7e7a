use flume::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::{
    event::events::Event,
    ui::message::{AppMessage, MainList},
};

pub struct InputHandler;

impl InputHandler {
    /// Maps one command line to a message.
    ///
    /// `<list> <row>` selects a row, e.g. `genres 3`.
    pub fn handle_line(line: &str) -> Option<AppMessage> {
        let mut words = line.split_whitespace();
        let command = words.next()?.to_ascii_lowercase();
        let argument = words.next();

        match (command.as_str(), argument) {
            ("q" | "quit", None) => Some(AppMessage::Quit),
            ("b" | "back", None) => Some(AppMessage::GoBack),
            ("about", None) => Some(AppMessage::OpenAbout),
            ("view", Some(index)) => index.parse().ok().map(AppMessage::SetPanoramaIndex),
            (list, Some(row)) => {
                let list = MainList::parse(list)?;
                row.parse().ok().map(|row| AppMessage::Select(list, row))
            }
            _ => None,
        }
    }
}

/// Forwards commands typed on stdin to the session until EOF or `quit`.
pub async fn forward_stdin(tx: Sender<Event>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        match InputHandler::handle_line(&line) {
            Some(AppMessage::Quit) => break,
            Some(message) => {
                if tx.send(Event::Message(message)).is_err() {
                    return;
                }
            }
            None if line.trim().is_empty() => {}
            None => debug!(line = line.as_str(), "unknown command"),
        }
    }
    let _ = tx.send(Event::Message(AppMessage::Quit));
}
