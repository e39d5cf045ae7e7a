use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use super::{Coordinate, GeocodeError, MapLocation, ReverseGeocoder};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Default, Deserialize)]
struct ReverseResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    #[serde(default)]
    country_code: Option<String>,
}

impl ReverseResponse {
    fn into_matches(self) -> Result<Vec<MapLocation>, GeocodeError> {
        if let Some(error) = self.error {
            return Err(GeocodeError::Service(error));
        }
        Ok(self
            .address
            .and_then(|a| a.country_code)
            .map(|country_code| MapLocation { country_code })
            .into_iter()
            .collect())
    }
}

/// Reverse geocoder speaking the Nominatim `reverse` JSON protocol.
pub struct HttpGeocoder {
    client: Client,
    url: String,
}

impl HttpGeocoder {
    pub fn new(url: impl Into<String>) -> Result<Self, GeocodeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GeocodeError::Request(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl ReverseGeocoder for HttpGeocoder {
    async fn reverse(&self, coordinate: Coordinate) -> Result<Vec<MapLocation>, GeocodeError> {
        let lat = coordinate.latitude.to_string();
        let lon = coordinate.longitude.to_string();
        let url = Url::parse_with_params(
            &self.url,
            &[("format", "jsonv2"), ("lat", lat.as_str()), ("lon", lon.as_str()), ("zoom", "3")],
        )
        .map_err(|e| GeocodeError::Request(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GeocodeError::Request(e.to_string()))?
            .json::<ReverseResponse>()
            .await
            .map_err(|e| GeocodeError::Request(e.to_string()))?;

        response.into_matches()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_becomes_single_match() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{ "address": { "country": "Suomi", "country_code": "fi" } }"#)
                .unwrap();

        let matches = response.into_matches().unwrap();
        assert_eq!(matches, vec![MapLocation { country_code: "fi".into() }]);
    }

    #[test]
    fn service_error_is_reported() {
        let response: ReverseResponse =
            serde_json::from_str(r#"{ "error": "Unable to geocode" }"#).unwrap();

        assert_eq!(
            response.into_matches(),
            Err(GeocodeError::Service("Unable to geocode".into()))
        );
    }

    #[test]
    fn missing_address_yields_no_matches() {
        let response: ReverseResponse = serde_json::from_str("{}").unwrap();

        assert_eq!(response.into_matches(), Ok(vec![]));
    }
}
