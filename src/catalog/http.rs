use std::sync::Arc;

use arc_swap::ArcSwapOption;
use flume::Sender;
use futures::future::join_all;
use reqwest::{Client, Url};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::{debug, info, warn};

use crate::{
    catalog::{
        CatalogApi, CatalogError,
        recommend::{MAX_RECOMMENDATION_SOURCES, rank_recommendations},
    },
    event::events::Event,
    model::{Artist, Genre, Mix, MixGroup, Product},
};

const FALLBACK_REGION: &str = "us";
const ITEMS_PER_PAGE: &str = "30";

#[derive(Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Catalog client over HTTP. Every call spawns a task and reports back
/// through `event_tx`.
pub struct HttpCatalog {
    client: Client,
    base_url: String,
    app_id: String,
    fallback_region: Option<String>,
    country: ArcSwapOption<String>,
    event_tx: Sender<Event>,
}

impl HttpCatalog {
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        fallback_region: Option<String>,
        event_tx: Sender<Event>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            app_id: app_id.into(),
            fallback_region,
            country: ArcSwapOption::empty(),
            event_tx,
        }
    }

    pub fn country(&self) -> String {
        self.country
            .load_full()
            .map(|c| c.as_ref().clone())
            .or_else(|| self.fallback_region.clone())
            .unwrap_or_else(|| FALLBACK_REGION.to_string())
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, CatalogError> {
        let raw = format!("{}/{}/{}", self.base_url, self.country(), path);
        let mut query = vec![("client_id", self.app_id.as_str()), ("itemsperpage", ITEMS_PER_PAGE)];
        query.extend_from_slice(params);

        Url::parse_with_params(&raw, &query).map_err(|e| CatalogError::InvalidUrl(e.to_string()))
    }

    /// Spawns a request for `path` and maps its items to an event.
    fn spawn_fetch<T, F>(&self, path: &str, params: &[(&str, &str)], on_items: F)
    where
        T: DeserializeOwned + Send + 'static,
        F: FnOnce(Vec<T>) -> Event + Send + 'static,
    {
        let tx = self.event_tx.clone();
        let url = match self.endpoint(path, params) {
            Ok(url) => url,
            Err(e) => {
                let _ = tx.send(Event::FetchError(e.to_string()));
                return;
            }
        };
        let client = self.client.clone();

        tokio::spawn(async move {
            debug!(url = url.as_str(), "catalog_request");
            match fetch_items::<T>(&client, url).await {
                Ok(items) => {
                    let _ = tx.send(on_items(items));
                }
                Err(e) => {
                    warn!("Catalog request failed: {}", e);
                    let _ = tx.send(Event::FetchError(e.to_string()));
                }
            }
        });
    }
}

async fn fetch_items<T: DeserializeOwned>(client: &Client, url: Url) -> Result<Vec<T>, CatalogError> {
    let page = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<Page<T>>()
        .await?;
    Ok(page.items)
}

async fn search_artist(client: &Client, url: Url, name: &str) -> Result<Artist, CatalogError> {
    fetch_items::<Artist>(client, url)
        .await?
        .into_iter()
        .find(|a| a.id.is_some() && a.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| CatalogError::NoMatch(name.to_string()))
}

impl CatalogApi for HttpCatalog {
    fn initialize(&self, country_code: Option<&str>) {
        self.country
            .store(country_code.map(|c| Arc::new(c.to_ascii_lowercase())));
        let country = self.country();
        info!(country = country.as_str(), "catalog_initialized");
    }

    fn get_artist_info_for_local_audio(&self, artists: &[Artist]) {
        let mut lookups = Vec::new();
        for artist in artists.iter().filter(|a| !a.is_resolved()) {
            match self.endpoint("", &[("q", artist.name.as_str()), ("category", "Artist")]) {
                Ok(url) => lookups.push((artist.name.clone(), url)),
                Err(e) => warn!("Skipping search for '{}': {}", artist.name, e),
            }
        }

        let already_resolved: Vec<Artist> = artists.iter().filter(|a| a.is_resolved()).cloned().collect();
        let local: Vec<Artist> = artists.to_vec();
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        let base_url = self.base_url.clone();
        let country = self.country();
        let app_id = self.app_id.clone();

        tokio::spawn(async move {
            let searches = lookups
                .iter()
                .map(|(name, url)| search_artist(&client, url.clone(), name));
            let mut resolved = already_resolved;
            for ((name, _), result) in lookups.iter().zip(join_all(searches).await) {
                match result {
                    Ok(found) => {
                        let id = found.id.clone().unwrap_or_default();
                        let _ = tx.send(Event::LocalArtistResolved {
                            name: name.clone(),
                            id: id.clone(),
                        });
                        resolved.push(Artist {
                            id: Some(id),
                            ..Artist::local(name.clone(), 0)
                        });
                    }
                    Err(e) => debug!("Local artist lookup failed: {}", e),
                }
            }

            let similar_urls: Vec<Url> = resolved
                .iter()
                .filter_map(|a| a.id.as_deref())
                .take(MAX_RECOMMENDATION_SOURCES)
                .filter_map(|id| {
                    let raw = format!("{}/{}/creators/{}/similar/", base_url, country, id);
                    Url::parse_with_params(&raw, &[("client_id", app_id.as_str())]).ok()
                })
                .collect();
            let similar = join_all(
                similar_urls
                    .into_iter()
                    .map(|url| fetch_items::<Artist>(&client, url)),
            )
            .await
            .into_iter()
            .filter_map(|r| r.map_err(|e| debug!("Similar artist lookup failed: {}", e)).ok())
            .collect::<Vec<_>>();

            let _ = tx.send(Event::RecommendationsFetched(rank_recommendations(&local, similar)));
        });
    }

    fn get_new_releases(&self) {
        self.spawn_fetch::<Product, _>("products/new/Album/", &[], Event::NewReleasesFetched);
    }

    fn get_top_artists(&self) {
        self.spawn_fetch::<Artist, _>("creators/top/", &[], Event::TopArtistsFetched);
    }

    fn get_genres(&self) {
        self.spawn_fetch::<Genre, _>("genres/", &[], Event::GenresFetched);
    }

    fn get_mix_groups(&self) {
        self.spawn_fetch::<MixGroup, _>("mixes/groups/", &[], Event::MixGroupsFetched);
    }

    fn get_products_for_artist(&self, artist_id: &str) {
        let path = format!("creators/{}/products/", artist_id);
        let artist_id = artist_id.to_string();
        self.spawn_fetch::<Product, _>(&path, &[], move |products| Event::ArtistProductsFetched {
            artist_id,
            products,
        });
    }

    fn get_similar_artists(&self, artist_id: &str) {
        let path = format!("creators/{}/similar/", artist_id);
        let artist_id = artist_id.to_string();
        self.spawn_fetch::<Artist, _>(&path, &[], move |artists| Event::SimilarArtistsFetched {
            artist_id,
            artists,
        });
    }

    fn get_top_artists_for_genre(&self, genre_id: &str) {
        let genre = genre_id.to_string();
        self.spawn_fetch::<Artist, _>("creators/top/", &[("genre", genre_id)], move |artists| {
            Event::GenreArtistsFetched {
                genre_id: genre,
                artists,
            }
        });
    }

    fn get_mixes(&self, group_id: &str) {
        let path = format!("mixes/groups/{}/", group_id);
        let group_id = group_id.to_string();
        self.spawn_fetch::<Mix, _>(&path, &[], move |mixes| Event::MixesFetched { group_id, mixes });
    }

    fn launch_product(&self, product_id: &str) {
        info!(product_id, "launching product view");
        let _ = self.event_tx.send(Event::ProductLaunched(product_id.to_string()));
    }
}
