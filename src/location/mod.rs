pub mod configured;
pub mod country_codes;
pub mod geocoder;
pub mod resolver;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

pub use configured::ConfiguredLocation;
pub use geocoder::HttpGeocoder;
pub use resolver::{CountryResolver, Resolution};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One reverse-geocode match. `country_code` is ISO 3166-1, normally alpha-3.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapLocation {
    pub country_code: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    #[error("Location access denied")]
    PermissionDenied,

    #[error("No position within {0:?}")]
    Timeout(Duration),

    #[error("Location service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("Reverse geocode request failed: {0}")]
    Request(String),

    #[error("Reverse geocode service error: {0}")]
    Service(String),
}

#[async_trait]
pub trait LocationService: Send + Sync {
    /// Current position, accepting a cached fix no older than `max_age`.
    async fn get_position(
        &self,
        max_age: Duration,
        timeout: Duration,
    ) -> Result<Coordinate, LocationError>;
}

#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coordinate: Coordinate) -> Result<Vec<MapLocation>, GeocodeError>;
}
