use std::sync::Arc;

use flume::Sender;

use crate::{
    catalog::CatalogApi, event::events::Event, library::LibraryLoader, location::CountryResolver,
};

/// Collaborators shared by the session loop and the tasks it spawns.
#[derive(Clone)]
pub struct AppContext {
    pub catalog: Arc<dyn CatalogApi>,
    pub resolver: Arc<CountryResolver>,
    pub library: Arc<dyn LibraryLoader>,
    pub event_tx: Sender<Event>,
}
