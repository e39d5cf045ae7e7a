use serde::Deserialize;

use super::Thumbnails;

/// An artist from the local library or from the catalog.
///
/// Artists found on the device start without an `id`; the catalog search
/// fills it in later. Detail navigation requires a resolved id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
    #[serde(skip)]
    pub local_track_count: usize,
}

impl Artist {
    pub fn local(name: impl Into<String>, local_track_count: usize) -> Self {
        Self {
            id: None,
            name: name.into(),
            thumbnails: Thumbnails::default(),
            local_track_count,
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            thumbnails: Thumbnails::default(),
            local_track_count: 0,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.id.is_some()
    }

    /// Identity check used for selection tracking. Resolved artists compare by
    /// id, unresolved ones by case-insensitive name.
    pub fn is_same(&self, other: &Artist) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            (None, None) => self.name.eq_ignore_ascii_case(&other.name),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_artists_compare_by_id() {
        let local = Artist {
            id: Some("42".into()),
            name: "Queen".into(),
            local_track_count: 12,
            ..Default::default()
        };
        let top = Artist::with_id("42", "Queen");

        assert!(local.is_same(&top));
        assert!(!top.is_same(&Artist::with_id("43", "Queen")));
    }

    #[test]
    fn unresolved_artist_never_matches_resolved_one() {
        let local = Artist::local("queen", 3);

        assert!(local.is_same(&Artist::local("Queen", 1)));
        assert!(!local.is_same(&Artist::with_id("42", "Queen")));
    }
}
