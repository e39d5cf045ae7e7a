use std::time::Duration;

use flume::Sender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::{
    catalog::CatalogApi,
    config::StartupConfig,
    event::events::Event,
    location::Resolution,
    model::Artist,
    ui::{context::AppContext, state::SelectionState},
    util::task::TaskManager,
};

pub const LOCAL_AUDIO_TIMER: &str = "local_audio_timer";
pub const GEO_TIMER: &str = "geo_timer";
pub const LOCAL_LIBRARY_TASK: &str = "local_library";
pub const COUNTRY_TASK: &str = "country_resolution";

pub const LOCATION_UNAVAILABLE: &str = "Current location cannot be obtained. \
It is recommended that location service is turned on when using Music Explorer.\n\n\
Using region info from system settings instead.";

fn one_shot(delay: Duration, tx: Sender<Event>, event: Event) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(event);
    })
}

/// One-time session startup.
///
/// Showing the main page arms two one-shot timers: the first loads the local
/// library, the second resolves the country and then seeds the catalog with
/// the initial batch of requests. Nothing is armed twice per session.
pub struct StartupSequencer {
    config: StartupConfig,
    armed: bool,
    initialized: bool,
    local_info_pending: bool,
}

impl StartupSequencer {
    pub fn new(config: StartupConfig) -> Self {
        Self {
            config,
            armed: false,
            initialized: false,
            local_info_pending: false,
        }
    }

    /// Returns whether the timers were armed by this call.
    pub fn on_navigated_to(
        &mut self,
        state: &SelectionState,
        tasks: &mut TaskManager,
        tx: &Sender<Event>,
    ) -> bool {
        if state.is_data_loaded || self.armed {
            return false;
        }
        self.armed = true;

        tasks.spawn(
            LOCAL_AUDIO_TIMER,
            one_shot(self.config.local_audio_delay, tx.clone(), Event::LocalAudioTimerFired),
        );
        tasks.spawn(
            GEO_TIMER,
            one_shot(self.config.geo_delay, tx.clone(), Event::GeoTimerFired),
        );
        true
    }

    pub fn on_local_audio_timer(&mut self, tasks: &mut TaskManager, ctx: &AppContext) {
        tasks.abort(LOCAL_AUDIO_TIMER);

        let library = ctx.library.clone();
        let tx = ctx.event_tx.clone();
        tasks.spawn(
            LOCAL_LIBRARY_TASK,
            tokio::spawn(async move {
                let artists = library.load().await.unwrap_or_else(|e| {
                    warn!("Local library unavailable: {}", e);
                    Vec::new()
                });
                let _ = tx.send(Event::LocalLibraryLoaded(artists));
            }),
        );
    }

    pub fn on_local_library_loaded(
        &mut self,
        artists: Vec<Artist>,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
    ) {
        state.local_audio = artists;
        state.is_data_loaded = true;

        if self.local_info_pending {
            self.local_info_pending = false;
            catalog.get_artist_info_for_local_audio(&state.local_audio);
        }
    }

    pub fn on_geo_timer(&mut self, tasks: &mut TaskManager, ctx: &AppContext) {
        tasks.abort(GEO_TIMER);

        let resolver = ctx.resolver.clone();
        let tx = ctx.event_tx.clone();
        tasks.spawn(
            COUNTRY_TASK,
            tokio::spawn(async move {
                let resolution = resolver.resolve_detailed().await;
                let _ = tx.send(Event::CountryResolved(resolution));
            }),
        );
    }

    /// Returns whether the initialization batch was issued by this call.
    pub fn on_country_resolved(
        &mut self,
        resolution: Resolution,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
    ) -> bool {
        if self.initialized {
            return false;
        }
        if let Resolution::LocationUnavailable(_) = resolution {
            state.show_notice(LOCATION_UNAVAILABLE);
        }
        self.initialize_catalog(resolution.into_country_code(), state, catalog);
        true
    }

    fn initialize_catalog(
        &mut self,
        country_code: Option<String>,
        state: &mut SelectionState,
        catalog: &dyn CatalogApi,
    ) {
        self.initialized = true;
        info!(country = country_code.as_deref().unwrap_or("<device region>"), "initializing catalog");

        catalog.initialize(country_code.as_deref());
        state.country_code = country_code;

        // Artist search needs the scanned library; if the scan is still
        // running the request goes out once it completes.
        if state.is_data_loaded {
            catalog.get_artist_info_for_local_audio(&state.local_audio);
        } else {
            self.local_info_pending = true;
        }
        catalog.get_new_releases();
        catalog.get_top_artists();
        catalog.get_genres();
        catalog.get_mix_groups();
    }
}
