use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tracing::info;
use walkdir::WalkDir;

use super::{LibraryError, LibraryLoader};
use crate::model::Artist;

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "flac", "ogg", "opus", "m4a", "aac", "wav", "wma"];

/// Music directory laid out as `<artist>/<album>/<track>`.
pub struct LocalLibrary {
    root: Option<PathBuf>,
}

impl LocalLibrary {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

fn is_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| AUDIO_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

pub fn scan(root: &Path) -> Result<Vec<Artist>, LibraryError> {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for entry in WalkDir::new(root).min_depth(2).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_file() || !is_audio(entry.path()) {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        if let Some(artist) = relative.components().next() {
            let name = artist.as_os_str().to_string_lossy().into_owned();
            *counts.entry(name).or_default() += 1;
        }
    }

    let mut artists: Vec<Artist> = counts
        .into_iter()
        .map(|(name, count)| Artist::local(name, count))
        .collect();
    artists.sort_by(|a, b| {
        b.local_track_count
            .cmp(&a.local_track_count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    Ok(artists)
}

#[async_trait]
impl LibraryLoader for LocalLibrary {
    async fn load(&self) -> Result<Vec<Artist>, LibraryError> {
        let root = self.root.clone().ok_or(LibraryError::MissingRoot)?;
        let artists = tokio::task::spawn_blocking(move || scan(&root))
            .await
            .map_err(|e| LibraryError::Aborted(e.to_string()))??;

        info!(artists = artists.len(), "local_library_loaded");
        Ok(artists)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[tokio::test]
    async fn artists_are_ordered_by_track_count() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "Yes/Fragile/01 Roundabout.flac");
        touch(dir.path(), "Queen/Innuendo/01 Innuendo.mp3");
        touch(dir.path(), "Queen/Innuendo/02 Headlong.MP3");
        touch(dir.path(), "Queen/Innuendo/cover.jpg");
        touch(dir.path(), "loose.mp3");

        let artists = LocalLibrary::new(Some(dir.path().to_path_buf()))
            .load()
            .await
            .unwrap();

        assert_eq!(
            artists,
            vec![Artist::local("Queen", 2), Artist::local("Yes", 1)]
        );
    }

    #[tokio::test]
    async fn missing_root_is_an_error() {
        let result = LocalLibrary::new(None).load().await;

        assert!(matches!(result, Err(LibraryError::MissingRoot)));
    }
}
