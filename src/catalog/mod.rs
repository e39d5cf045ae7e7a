pub mod http;
pub mod recommend;

use thiserror::Error;

use crate::model::Artist;

pub use http::HttpCatalog;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid catalog url: {0}")]
    InvalidUrl(String),

    #[error("No catalog match for '{0}'")]
    NoMatch(String),
}

/// Fire-and-forget access to the remote music catalog.
///
/// None of these calls block or return data. Results arrive later as
/// [`Event`](crate::event::events::Event)s on the session channel.
pub trait CatalogApi: Send + Sync {
    /// Sets the territory every following request is made for. `None` falls
    /// back to the region configured for the device.
    fn initialize(&self, country_code: Option<&str>);
    /// Resolves catalog ids for on-device artists and builds recommendations
    /// from their similar artists.
    fn get_artist_info_for_local_audio(&self, artists: &[Artist]);
    fn get_new_releases(&self);
    fn get_top_artists(&self);
    fn get_genres(&self);
    fn get_mix_groups(&self);
    fn get_products_for_artist(&self, artist_id: &str);
    fn get_similar_artists(&self, artist_id: &str);
    fn get_top_artists_for_genre(&self, genre_id: &str);
    fn get_mixes(&self, group_id: &str);
    fn launch_product(&self, product_id: &str);
}

/// Region from a POSIX locale string such as `en_GB.UTF-8`.
pub fn region_from_locale(locale: &str) -> Option<String> {
    let tag = locale.split(['.', '@']).next()?;
    let (_, region) = tag.split_once(['_', '-'])?;

    if region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(region.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_is_taken_from_locale_tag() {
        assert_eq!(region_from_locale("en_GB.UTF-8").as_deref(), Some("gb"));
        assert_eq!(region_from_locale("fi-FI").as_deref(), Some("fi"));
        assert_eq!(region_from_locale("de_DE@euro").as_deref(), Some("de"));
    }

    #[test]
    fn locale_without_region_yields_none() {
        assert_eq!(region_from_locale("C"), None);
        assert_eq!(region_from_locale("POSIX"), None);
        assert_eq!(region_from_locale("en_001"), None);
    }
}
