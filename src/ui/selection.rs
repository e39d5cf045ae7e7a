use tracing::{debug, info};

use crate::{
    catalog::CatalogApi,
    model::{Artist, Genre, MixGroup, Product},
    ui::{
        message::{MainList, Page},
        router::Navigator,
        state::SelectionState,
    },
};

pub const MISSING_ARTIST_DATA: &str = "Missing necessary data to browse artist info. \
Please wait for a while and try again.\n\
If the problem persists, ensure the device is connected to Internet and restart the application.";

/// Reacts to a row being selected in one of the main page lists.
///
/// Fetches are only issued when the selection differs from what the state
/// already tracks for that category. The list's selection is always reset
/// afterwards so the same row can raise a change again.
#[derive(Debug, Default)]
pub struct SelectionRouter {
    selected: [Option<usize>; 6],
}

impl SelectionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self, list: MainList) -> Option<usize> {
        self.selected[list.index()]
    }

    fn reset(&mut self, list: MainList) {
        self.selected[list.index()] = None;
    }

    pub fn select(
        &mut self,
        list: MainList,
        index: usize,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
        nav: &mut dyn Navigator,
    ) {
        self.selected[list.index()] = Some(index);
        self.on_selection_changed(list, state, catalog, nav);
    }

    pub fn on_selection_changed(
        &mut self,
        list: MainList,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
        nav: &mut dyn Navigator,
    ) {
        let Some(index) = self.selected_index(list) else {
            return;
        };

        match list {
            MainList::LocalAudio => match state.local_audio.get(index).cloned() {
                Some(artist) => self.on_favorite_selected(artist, state, catalog, nav),
                None => self.reset(list),
            },
            MainList::Recommendations => match state.recommendations.get(index).cloned() {
                Some(artist) => self.show_artist(list, artist, state, catalog, nav),
                None => self.reset(list),
            },
            MainList::TopArtists => match state.top_artists.get(index).cloned() {
                Some(artist) => self.show_artist(list, artist, state, catalog, nav),
                None => self.reset(list),
            },
            MainList::NewReleases => match state.new_releases.get(index).cloned() {
                Some(product) => self.on_new_release_selected(product, catalog),
                None => self.reset(list),
            },
            MainList::Genres => match state.genres.get(index).cloned() {
                Some(genre) => self.on_genre_selected(genre, state, catalog, nav),
                None => self.reset(list),
            },
            MainList::MixGroups => match state.mix_groups.get(index).cloned() {
                Some(group) => self.on_mix_group_selected(group, state, catalog, nav),
                None => self.reset(list),
            },
        }
    }

    fn on_favorite_selected(
        &mut self,
        artist: Artist,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
        nav: &mut dyn Navigator,
    ) {
        // The catalog knows nothing about the artist until search has
        // filled in its id.
        if !artist.is_resolved() {
            state.show_notice(MISSING_ARTIST_DATA);
            self.reset(MainList::LocalAudio);
            return;
        }
        self.show_artist(MainList::LocalAudio, artist, state, catalog, nav);
    }

    fn show_artist(
        &mut self,
        list: MainList,
        artist: Artist,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
        nav: &mut dyn Navigator,
    ) {
        let unchanged = state
            .selected_artist
            .as_ref()
            .is_some_and(|current| current.is_same(&artist));

        if !unchanged {
            let artist_id = artist.id.clone().unwrap_or_default();
            debug!(artist = artist.name.as_str(), "artist selection changed");
            state.select_artist(artist);
            catalog.get_products_for_artist(&artist_id);
            catalog.get_similar_artists(&artist_id);
        }
        self.reset(list);
        nav.navigate(Page::ArtistDetail);
    }

    fn on_new_release_selected(&mut self, product: Product, catalog: &dyn CatalogApi) {
        info!(
            product = product.name.as_str(),
            performers = product.performer_names(),
            "launching new release"
        );
        catalog.launch_product(&product.id);
        self.reset(MainList::NewReleases);
    }

    fn on_genre_selected(
        &mut self,
        genre: Genre,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
        nav: &mut dyn Navigator,
    ) {
        let key = genre.key();
        if state.selected_genre.as_deref() != Some(key.as_str()) {
            state.top_artists_for_genre.clear();
            catalog.get_top_artists_for_genre(&genre.id);
            state.selected_genre = Some(key);
            state.selected_genre_id = Some(genre.id);
        }
        nav.navigate(Page::TopArtistsForGenre);
        self.reset(MainList::Genres);
    }

    fn on_mix_group_selected(
        &mut self,
        group: MixGroup,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
        nav: &mut dyn Navigator,
    ) {
        if state.selected_mix_group.as_deref() != Some(group.id.as_str()) {
            state.mixes.clear();
            catalog.get_mixes(&group.id);
            state.selected_mix_group = Some(group.id);
        }
        nav.navigate(Page::Mixes);
        self.reset(MainList::MixGroups);
    }

    /// The favourites view is the first panorama item.
    pub fn on_panorama_changed(&self, index: usize, state: &mut SelectionState) {
        state.flip_favourites = index == 0;
    }
}
