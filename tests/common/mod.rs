#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use music_explorer::{
    catalog::CatalogApi,
    config::StartupConfig,
    library::{LibraryError, LibraryLoader},
    location::{
        Coordinate, CountryResolver, GeocodeError, LocationError, LocationService, MapLocation,
        ReverseGeocoder,
    },
    model::Artist,
    ui::{
        app::App, context::AppContext, message::Page, router::Navigator,
        util::handler::EventHandler,
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Initialize(Option<String>),
    ArtistInfoForLocalAudio(Vec<String>),
    NewReleases,
    TopArtists,
    Genres,
    MixGroups,
    ProductsForArtist(String),
    SimilarArtists(String),
    TopArtistsForGenre(String),
    Mixes(String),
    LaunchProduct(String),
    Navigate(Page),
}

/// Catalog and navigator double that records calls in order.
#[derive(Default)]
pub struct Recorder {
    calls: Mutex<Vec<Call>>,
}

impl Recorder {
    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }
}

impl CatalogApi for Recorder {
    fn initialize(&self, country_code: Option<&str>) {
        self.record(Call::Initialize(country_code.map(str::to_string)));
    }

    fn get_artist_info_for_local_audio(&self, artists: &[Artist]) {
        self.record(Call::ArtistInfoForLocalAudio(
            artists.iter().map(|a| a.name.clone()).collect(),
        ));
    }

    fn get_new_releases(&self) {
        self.record(Call::NewReleases);
    }

    fn get_top_artists(&self) {
        self.record(Call::TopArtists);
    }

    fn get_genres(&self) {
        self.record(Call::Genres);
    }

    fn get_mix_groups(&self) {
        self.record(Call::MixGroups);
    }

    fn get_products_for_artist(&self, artist_id: &str) {
        self.record(Call::ProductsForArtist(artist_id.to_string()));
    }

    fn get_similar_artists(&self, artist_id: &str) {
        self.record(Call::SimilarArtists(artist_id.to_string()));
    }

    fn get_top_artists_for_genre(&self, genre_id: &str) {
        self.record(Call::TopArtistsForGenre(genre_id.to_string()));
    }

    fn get_mixes(&self, group_id: &str) {
        self.record(Call::Mixes(group_id.to_string()));
    }

    fn launch_product(&self, product_id: &str) {
        self.record(Call::LaunchProduct(product_id.to_string()));
    }
}

pub struct RecordingNavigator(pub Arc<Recorder>);

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, page: Page) {
        self.0.record(Call::Navigate(page));
    }
}

pub enum Location {
    At(Coordinate),
    Failing(LocationError),
    Hanging,
}

#[async_trait]
impl LocationService for Location {
    async fn get_position(
        &self,
        _max_age: Duration,
        _timeout: Duration,
    ) -> Result<Coordinate, LocationError> {
        match self {
            Location::At(coordinate) => Ok(*coordinate),
            Location::Failing(e) => Err(e.clone()),
            Location::Hanging => std::future::pending().await,
        }
    }
}

pub fn helsinki() -> Location {
    Location::At(Coordinate::new(60.17, 24.94))
}

pub struct Geocoder(pub Result<Vec<MapLocation>, GeocodeError>);

impl Geocoder {
    pub fn matching(codes: &[&str]) -> Self {
        Self(Ok(codes
            .iter()
            .map(|c| MapLocation {
                country_code: c.to_string(),
            })
            .collect()))
    }
}

#[async_trait]
impl ReverseGeocoder for Geocoder {
    async fn reverse(&self, _coordinate: Coordinate) -> Result<Vec<MapLocation>, GeocodeError> {
        self.0.clone()
    }
}

/// Library that answers after `delay` with a fixed artist list.
pub struct StaticLibrary {
    pub artists: Vec<Artist>,
    pub delay: Duration,
}

#[async_trait]
impl LibraryLoader for StaticLibrary {
    async fn load(&self) -> Result<Vec<Artist>, LibraryError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.artists.clone())
    }
}

pub fn app_with(location: Location, geocoder: Geocoder, library: StaticLibrary) -> (App, Arc<Recorder>) {
    let (event_tx, event_rx) = flume::unbounded();
    let recorder = Arc::new(Recorder::default());
    let startup = StartupConfig::default();

    let ctx = AppContext {
        catalog: recorder.clone(),
        resolver: Arc::new(CountryResolver::new(
            Arc::new(location),
            Arc::new(geocoder),
            startup.location_max_age,
            startup.location_timeout,
        )),
        library: Arc::new(library),
        event_tx,
    };
    (App::with_context(ctx, event_rx, startup), recorder)
}

pub fn app() -> (App, Arc<Recorder>) {
    app_with(
        helsinki(),
        Geocoder::matching(&["FIN"]),
        StaticLibrary {
            artists: vec![Artist::local("Queen", 12), Artist::local("Yes", 3)],
            delay: Duration::ZERO,
        },
    )
}

/// Feeds events to the session for `duration` of (paused) time.
pub async fn run_for(app: &mut App, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    loop {
        let next = tokio::time::timeout_at(deadline, app.event_rx.recv_async()).await;
        match next {
            Ok(Ok(evt)) => EventHandler::handle_event(app, evt),
            _ => break,
        }
    }
}

pub const INITIAL_BATCH: [Call; 4] = [Call::NewReleases, Call::TopArtists, Call::Genres, Call::MixGroups];
