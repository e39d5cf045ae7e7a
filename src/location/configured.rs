use std::time::Duration;

use async_trait::async_trait;

use super::{Coordinate, LocationError, LocationService};

/// Location source backed by a fixed coordinate from configuration.
/// Without one, every request fails as unavailable.
#[derive(Debug, Clone, Default)]
pub struct ConfiguredLocation {
    coordinate: Option<Coordinate>,
}

impl ConfiguredLocation {
    pub fn new(coordinate: Option<Coordinate>) -> Self {
        Self { coordinate }
    }
}

#[async_trait]
impl LocationService for ConfiguredLocation {
    async fn get_position(
        &self,
        _max_age: Duration,
        _timeout: Duration,
    ) -> Result<Coordinate, LocationError> {
        self.coordinate
            .ok_or_else(|| LocationError::Unavailable("no coordinate configured".to_string()))
    }
}
