use tracing::{debug, warn};

use crate::model::{Artist, Genre, Mix, MixGroup, Product, ProductCategory};

/// Session-wide view model. Owned by the session loop and passed to the
/// handlers explicitly; background tasks never touch it directly.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub local_audio: Vec<Artist>,
    pub recommendations: Vec<Artist>,
    pub new_releases: Vec<Product>,
    pub top_artists: Vec<Artist>,
    pub genres: Vec<Genre>,
    pub mix_groups: Vec<MixGroup>,

    pub selected_artist: Option<Artist>,
    /// Lower-cased name of the selected genre.
    pub selected_genre: Option<String>,
    pub selected_genre_id: Option<String>,
    pub selected_mix_group: Option<String>,

    pub albums_for_artist: Vec<Product>,
    pub singles_for_artist: Vec<Product>,
    pub tracks_for_artist: Vec<Product>,
    pub similar_for_artist: Vec<Artist>,
    pub top_artists_for_genre: Vec<Artist>,
    pub mixes: Vec<Mix>,

    pub is_data_loaded: bool,
    pub flip_favourites: bool,
    pub country_code: Option<String>,
    pub notice: Option<String>,
    pub launched_product: Option<String>,
    pub last_error: Option<String>,
}

impl SelectionState {
    /// Makes `artist` the selected one and drops the details of the previous
    /// selection in the same step.
    pub fn select_artist(&mut self, artist: Artist) {
        self.selected_artist = Some(artist);
        self.clear_artist_details();
    }

    pub fn clear_artist_details(&mut self) {
        self.albums_for_artist.clear();
        self.singles_for_artist.clear();
        self.tracks_for_artist.clear();
        self.similar_for_artist.clear();
    }

    pub fn has_artist_details(&self) -> bool {
        !(self.albums_for_artist.is_empty()
            && self.singles_for_artist.is_empty()
            && self.tracks_for_artist.is_empty()
            && self.similar_for_artist.is_empty())
    }

    fn is_selected_artist(&self, artist_id: &str) -> bool {
        self.selected_artist
            .as_ref()
            .is_some_and(|a| a.id.as_deref().unwrap_or_default() == artist_id)
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{}", message);
        self.notice = Some(message);
    }

    /// Fills the catalog id of an on-device artist found by search.
    pub fn resolve_local_artist(&mut self, name: &str, id: String) {
        if let Some(artist) = self
            .local_audio
            .iter_mut()
            .find(|a| !a.is_resolved() && a.name.eq_ignore_ascii_case(name))
        {
            artist.id = Some(id);
        }
    }

    /// Returns `false` when the products belong to an artist that is no
    /// longer selected and were dropped.
    pub fn apply_artist_products(&mut self, artist_id: &str, products: Vec<Product>) -> bool {
        if !self.is_selected_artist(artist_id) {
            return false;
        }
        // A reply replaces whatever an earlier request for the same artist
        // delivered.
        self.albums_for_artist.clear();
        self.singles_for_artist.clear();
        self.tracks_for_artist.clear();
        for product in products {
            match product.category() {
                ProductCategory::Album => self.albums_for_artist.push(product),
                ProductCategory::Single => self.singles_for_artist.push(product),
                ProductCategory::Track => self.tracks_for_artist.push(product),
                ProductCategory::Other => debug!(id = product.id.as_str(), "skipping product"),
            }
        }
        true
    }

    pub fn apply_similar_artists(&mut self, artist_id: &str, artists: Vec<Artist>) -> bool {
        if !self.is_selected_artist(artist_id) {
            return false;
        }
        self.similar_for_artist = artists;
        true
    }

    pub fn apply_genre_artists(&mut self, genre_id: &str, artists: Vec<Artist>) -> bool {
        if self.selected_genre_id.as_deref() != Some(genre_id) {
            return false;
        }
        self.top_artists_for_genre = artists;
        true
    }

    pub fn apply_mixes(&mut self, group_id: &str, mixes: Vec<Mix>) -> bool {
        if self.selected_mix_group.as_deref() != Some(group_id) {
            return false;
        }
        self.mixes = mixes;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(id: &str) -> Product {
        Product::new(id, "Album", ProductCategory::Album)
    }

    #[test]
    fn selecting_an_artist_clears_previous_details() {
        let mut state = SelectionState::default();
        state.select_artist(Artist::with_id("1", "Queen"));
        state.apply_artist_products("1", vec![album("a")]);
        state.apply_similar_artists("1", vec![Artist::with_id("2", "Yes")]);
        assert!(state.has_artist_details());

        state.select_artist(Artist::with_id("3", "Rush"));
        assert!(!state.has_artist_details());
    }

    #[test]
    fn late_results_for_previous_artist_are_dropped() {
        let mut state = SelectionState::default();
        state.select_artist(Artist::with_id("1", "Queen"));
        state.select_artist(Artist::with_id("3", "Rush"));

        assert!(!state.apply_artist_products("1", vec![album("a")]));
        assert!(!state.apply_similar_artists("1", vec![Artist::with_id("2", "Yes")]));
        assert!(!state.has_artist_details());
    }

    #[test]
    fn products_are_split_by_category() {
        let mut state = SelectionState::default();
        state.select_artist(Artist::with_id("1", "Queen"));

        state.apply_artist_products(
            "1",
            vec![
                album("a"),
                Product::new("s", "Single", ProductCategory::Single),
                Product::new("t", "Track", ProductCategory::Track),
                Product::new("o", "Other", ProductCategory::Other),
            ],
        );

        assert_eq!(state.albums_for_artist.len(), 1);
        assert_eq!(state.singles_for_artist.len(), 1);
        assert_eq!(state.tracks_for_artist.len(), 1);
    }

    #[test]
    fn repeated_product_replies_do_not_accumulate() {
        let mut state = SelectionState::default();
        state.select_artist(Artist::with_id("1", "Queen"));

        assert!(state.apply_artist_products("1", vec![album("a"), album("b")]));
        assert!(state.apply_artist_products("1", vec![album("a")]));

        assert_eq!(state.albums_for_artist, vec![album("a")]);
    }

    #[test]
    fn genre_and_mix_results_must_match_selection() {
        let mut state = SelectionState {
            selected_genre_id: Some("7".into()),
            selected_mix_group: Some("g1".into()),
            ..Default::default()
        };

        assert!(!state.apply_genre_artists("8", vec![Artist::with_id("1", "Queen")]));
        assert!(state.apply_genre_artists("7", vec![Artist::with_id("1", "Queen")]));
        assert!(!state.apply_mixes("g2", vec![]));
        assert!(state.apply_mixes("g1", vec![]));
    }

    #[test]
    fn local_artist_gets_resolved_by_name() {
        let mut state = SelectionState {
            local_audio: vec![Artist::local("Queen", 3)],
            ..Default::default()
        };

        state.resolve_local_artist("QUEEN", "42".into());
        assert_eq!(state.local_audio[0].id.as_deref(), Some("42"));
    }
}
