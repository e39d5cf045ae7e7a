use serde::Deserialize;

/// Catalog artwork URIs keyed by size, as in `"thumbnails": {"100x100": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Thumbnails {
    #[serde(rename = "100x100")]
    pub small: Option<String>,
    #[serde(rename = "200x200")]
    pub medium: Option<String>,
    #[serde(rename = "320x320")]
    pub large: Option<String>,
}
