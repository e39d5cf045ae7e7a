use std::sync::Arc;

use color_eyre::eyre::WrapErr;
use flume::Receiver;
use tracing::info;

use crate::{
    catalog::HttpCatalog,
    config::{Config, StartupConfig},
    event::events::Event,
    library::LocalLibrary,
    location::{ConfiguredLocation, CountryResolver, HttpGeocoder},
    ui::{
        context::AppContext,
        input::forward_stdin,
        router::Router,
        selection::SelectionRouter,
        startup::{COUNTRY_TASK, StartupSequencer},
        state::SelectionState,
        util::handler::EventHandler,
    },
    util::task::TaskManager,
};

const INPUT_TASK: &str = "stdin";

pub struct App {
    pub event_rx: Receiver<Event>,
    pub ctx: AppContext,
    pub state: SelectionState,
    pub router: Router,
    pub selection: SelectionRouter,
    pub startup: StartupSequencer,
    pub task_manager: TaskManager,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();

        let catalog = Arc::new(HttpCatalog::new(
            config.api_url.clone(),
            config.app_id.clone(),
            config.fallback_region.clone(),
            event_tx.clone(),
        ));
        let geocoder =
            HttpGeocoder::new(config.geocoder_url.clone()).wrap_err("Failed to build geocoder")?;
        let resolver = Arc::new(CountryResolver::new(
            Arc::new(ConfiguredLocation::new(config.coordinate)),
            Arc::new(geocoder),
            config.startup.location_max_age,
            config.startup.location_timeout,
        ));
        let library = Arc::new(LocalLibrary::new(config.library_dir.clone()));

        let ctx = AppContext {
            catalog,
            resolver,
            library,
            event_tx,
        };
        Ok(Self::with_context(ctx, event_rx, config.startup.clone()))
    }

    pub fn with_context(ctx: AppContext, event_rx: Receiver<Event>, startup: StartupConfig) -> Self {
        Self {
            event_rx,
            ctx,
            state: SelectionState::default(),
            router: Router::new(),
            selection: SelectionRouter::new(),
            startup: StartupSequencer::new(startup),
            task_manager: TaskManager::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        self.task_manager
            .spawn(INPUT_TASK, tokio::spawn(forward_stdin(self.ctx.event_tx.clone())));
        EventHandler::handle_event(self, Event::NavigatedTo);

        while !self.should_quit {
            tokio::select! {
                evt = self.event_rx.recv_async() => {
                    let Ok(evt) = evt else { break };
                    let from_user = matches!(evt, Event::Message(_));
                    EventHandler::handle_event(self, evt);
                    if let Some(notice) = self.state.notice.take() {
                        println!("! {}", notice);
                    }
                    if from_user {
                        println!("{}", self.status_line());
                    }
                }
                _ = tokio::signal::ctrl_c() => self.should_quit = true,
            }
        }

        info!("shutting down");
        self.task_manager.abort_all();
        Ok(())
    }

    pub fn status_line(&self) -> String {
        let country = match self.state.country_code.as_deref() {
            Some(code) => code,
            None if self.task_manager.is_running(COUNTRY_TASK) => "locating",
            None => "-",
        };
        format!(
            "[{:?}] country={} favourites={} recommended={} releases={} top={} genres={} mix groups={}",
            self.router.current(),
            country,
            self.state.local_audio.len(),
            self.state.recommendations.len(),
            self.state.new_releases.len(),
            self.state.top_artists.len(),
            self.state.genres.len(),
            self.state.mix_groups.len(),
        )
    }
}
