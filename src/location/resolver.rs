use std::{sync::Arc, time::Duration};

use tracing::{debug, info, warn};

use super::{LocationError, LocationService, ReverseGeocoder, country_codes};

/// Outcome of a country lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(String),
    /// A position was found but did not map to a known country.
    Unresolved,
    LocationUnavailable(LocationError),
}

impl Resolution {
    pub fn into_country_code(self) -> Option<String> {
        match self {
            Resolution::Resolved(code) => Some(code),
            _ => None,
        }
    }
}

/// Turns the device position into a two-letter country code.
///
/// Single attempt, no retries. Every failure degrades to "no country" so the
/// catalog falls back to the device region.
pub struct CountryResolver {
    location: Arc<dyn LocationService>,
    geocoder: Arc<dyn ReverseGeocoder>,
    max_age: Duration,
    timeout: Duration,
}

impl CountryResolver {
    pub fn new(
        location: Arc<dyn LocationService>,
        geocoder: Arc<dyn ReverseGeocoder>,
        max_age: Duration,
        timeout: Duration,
    ) -> Self {
        Self {
            location,
            geocoder,
            max_age,
            timeout,
        }
    }

    pub async fn resolve(&self) -> Option<String> {
        self.resolve_detailed().await.into_country_code()
    }

    pub async fn resolve_detailed(&self) -> Resolution {
        let request = self.location.get_position(self.max_age, self.timeout);
        let coordinate = match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(coordinate)) => coordinate,
            Ok(Err(e)) => {
                warn!("Current location cannot be obtained: {}", e);
                return Resolution::LocationUnavailable(e);
            }
            Err(_) => {
                warn!("Location request timed out after {:?}", self.timeout);
                return Resolution::LocationUnavailable(LocationError::Timeout(self.timeout));
            }
        };
        debug!(
            latitude = coordinate.latitude,
            longitude = coordinate.longitude,
            "position_acquired"
        );

        let matches = match self.geocoder.reverse(coordinate).await {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Reverse geocode failed: {}", e);
                return Resolution::Unresolved;
            }
        };

        let Some(first) = matches.first() else {
            warn!("Reverse geocode returned no matches");
            return Resolution::Unresolved;
        };

        match country_codes::two_letter(&first.country_code) {
            Some(code) => {
                info!(country = code, "country_resolved");
                Resolution::Resolved(code.to_string())
            }
            None => {
                warn!("Unknown country code '{}'", first.country_code);
                Resolution::Unresolved
            }
        }
    }
}
