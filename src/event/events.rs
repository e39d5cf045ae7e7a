use crate::{
    location::Resolution,
    model::{Artist, Genre, Mix, MixGroup, Product},
    ui::message::AppMessage,
};

/// Everything the session loop reacts to. Background tasks (timers, location
/// lookup, catalog requests) only ever talk to the session through this type.
#[derive(Debug, Clone)]
pub enum Event {
    // Startup
    NavigatedTo,
    LocalAudioTimerFired,
    GeoTimerFired,
    LocalLibraryLoaded(Vec<Artist>),
    CountryResolved(Resolution),

    // Catalog results
    LocalArtistResolved {
        name: String,
        id: String,
    },
    RecommendationsFetched(Vec<Artist>),
    NewReleasesFetched(Vec<Product>),
    TopArtistsFetched(Vec<Artist>),
    GenresFetched(Vec<Genre>),
    MixGroupsFetched(Vec<MixGroup>),
    ArtistProductsFetched {
        artist_id: String,
        products: Vec<Product>,
    },
    SimilarArtistsFetched {
        artist_id: String,
        artists: Vec<Artist>,
    },
    GenreArtistsFetched {
        genre_id: String,
        artists: Vec<Artist>,
    },
    MixesFetched {
        group_id: String,
        mixes: Vec<Mix>,
    },
    ProductLaunched(String),
    FetchError(String),

    // User input
    Message(AppMessage),
}
