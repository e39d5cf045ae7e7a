pub mod local;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Artist;

pub use local::LocalLibrary;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("No music directory configured")]
    MissingRoot,

    #[error("Failed to scan music directory: {0}")]
    Scan(#[from] walkdir::Error),

    #[error("Library scan aborted: {0}")]
    Aborted(String),
}

/// One-shot loader of on-device audio metadata.
#[async_trait]
pub trait LibraryLoader: Send + Sync {
    /// Favourite artists, most tracks first.
    async fn load(&self) -> Result<Vec<Artist>, LibraryError>;
}
