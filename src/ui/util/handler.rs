use tracing::{debug, info, warn};

use crate::{
    event::events::Event,
    ui::{
        app::App,
        message::{AppMessage, Page},
        router::Navigator,
    },
};

pub struct EventHandler;

impl EventHandler {
    /// Applies one event to the session. This is the only place session
    /// state changes.
    pub fn handle_event(app: &mut App, evt: Event) {
        match evt {
            Event::NavigatedTo => {
                if app
                    .startup
                    .on_navigated_to(&app.state, &mut app.task_manager, &app.ctx.event_tx)
                {
                    info!("startup timers armed");
                }
            }
            Event::LocalAudioTimerFired => {
                app.startup.on_local_audio_timer(&mut app.task_manager, &app.ctx);
            }
            Event::GeoTimerFired => {
                app.startup.on_geo_timer(&mut app.task_manager, &app.ctx);
            }
            Event::LocalLibraryLoaded(artists) => {
                app.startup
                    .on_local_library_loaded(artists, &mut app.state, app.ctx.catalog.as_ref());
            }
            Event::CountryResolved(resolution) => {
                if !app
                    .startup
                    .on_country_resolved(resolution, &mut app.state, app.ctx.catalog.as_ref())
                {
                    debug!("catalog already initialized");
                }
            }
            Event::LocalArtistResolved { name, id } => {
                app.state.resolve_local_artist(&name, id);
            }
            Event::RecommendationsFetched(artists) => app.state.recommendations = artists,
            Event::NewReleasesFetched(products) => app.state.new_releases = products,
            Event::TopArtistsFetched(artists) => app.state.top_artists = artists,
            Event::GenresFetched(genres) => app.state.genres = genres,
            Event::MixGroupsFetched(groups) => app.state.mix_groups = groups,
            Event::ArtistProductsFetched {
                artist_id,
                products,
            } => {
                if !app.state.apply_artist_products(&artist_id, products) {
                    debug!(artist_id = artist_id.as_str(), "discarding stale products");
                }
            }
            Event::SimilarArtistsFetched { artist_id, artists } => {
                if !app.state.apply_similar_artists(&artist_id, artists) {
                    debug!(artist_id = artist_id.as_str(), "discarding stale similar artists");
                }
            }
            Event::GenreArtistsFetched { genre_id, artists } => {
                if !app.state.apply_genre_artists(&genre_id, artists) {
                    debug!(genre_id = genre_id.as_str(), "discarding stale genre artists");
                }
            }
            Event::MixesFetched { group_id, mixes } => {
                if !app.state.apply_mixes(&group_id, mixes) {
                    debug!(group_id = group_id.as_str(), "discarding stale mixes");
                }
            }
            Event::ProductLaunched(product_id) => {
                app.state.launched_product = Some(product_id);
            }
            Event::FetchError(e) => {
                app.state.last_error = Some(e);
            }
            Event::Message(message) => Self::handle_message(app, message),
        }
    }

    fn handle_message(app: &mut App, message: AppMessage) {
        match message {
            AppMessage::Quit => app.should_quit = true,
            AppMessage::Select(list, index) => {
                if app.router.current() != Page::Main {
                    warn!(?list, "selection ignored outside the main page");
                    return;
                }
                app.selection.select(
                    list,
                    index,
                    &mut app.state,
                    app.ctx.catalog.as_ref(),
                    &mut app.router,
                );
            }
            AppMessage::SetPanoramaIndex(index) => {
                app.selection.on_panorama_changed(index, &mut app.state);
            }
            AppMessage::OpenAbout => app.router.navigate(Page::About),
            AppMessage::GoBack => {
                if app.router.pop() && app.router.current() == Page::Main {
                    Self::handle_event(app, Event::NavigatedTo);
                }
            }
        }
    }
}
