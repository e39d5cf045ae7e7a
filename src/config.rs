use std::{path::PathBuf, time::Duration};

use color_eyre::eyre::{Result, WrapErr, eyre};
use directories::UserDirs;

use crate::{catalog::region_from_locale, location::Coordinate};

pub const DEFAULT_API_URL: &str = "https://api.mixrad.io/1.x";
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Timings of the one-time startup sequence.
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub local_audio_delay: Duration,
    pub geo_delay: Duration,
    pub location_max_age: Duration,
    pub location_timeout: Duration,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            local_audio_delay: Duration::from_millis(300),
            geo_delay: Duration::from_secs(1),
            location_max_age: Duration::from_secs(60),
            location_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app_id: String,
    pub api_url: String,
    pub geocoder_url: String,
    pub library_dir: Option<PathBuf>,
    pub coordinate: Option<Coordinate>,
    pub fallback_region: Option<String>,
    pub startup: StartupConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let app_id = lookup("MUSIC_EXPLORER_APP_ID")
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| eyre!("MUSIC_EXPLORER_APP_ID environment variable must be set"))?;

        let library_dir = lookup("MUSIC_EXPLORER_LIBRARY_DIR")
            .map(PathBuf::from)
            .or_else(|| UserDirs::new().and_then(|dirs| dirs.audio_dir().map(|p| p.to_path_buf())));

        let coordinate = match (
            lookup("MUSIC_EXPLORER_LATITUDE"),
            lookup("MUSIC_EXPLORER_LONGITUDE"),
        ) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(
                parse_degrees(&lat, "MUSIC_EXPLORER_LATITUDE", 90.0)?,
                parse_degrees(&lon, "MUSIC_EXPLORER_LONGITUDE", 180.0)?,
            )),
            (None, None) => None,
            _ => {
                return Err(eyre!(
                    "MUSIC_EXPLORER_LATITUDE and MUSIC_EXPLORER_LONGITUDE must be set together"
                ));
            }
        };

        let fallback_region = lookup("MUSIC_EXPLORER_REGION")
            .map(|r| r.to_ascii_lowercase())
            .or_else(|| lookup("LC_ALL").as_deref().and_then(region_from_locale))
            .or_else(|| lookup("LANG").as_deref().and_then(region_from_locale));

        Ok(Self {
            app_id,
            api_url: lookup("MUSIC_EXPLORER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            geocoder_url: lookup("MUSIC_EXPLORER_GEOCODER_URL")
                .unwrap_or_else(|| DEFAULT_GEOCODER_URL.to_string()),
            library_dir,
            coordinate,
            fallback_region,
            startup: StartupConfig::default(),
        })
    }
}

fn parse_degrees(value: &str, key: &str, limit: f64) -> Result<f64> {
    let degrees: f64 = value
        .trim()
        .parse()
        .wrap_err_with(|| format!("{key} is not a number: {value}"))?;
    if !(-limit..=limit).contains(&degrees) {
        return Err(eyre!("{key} out of range: {degrees}"));
    }
    Ok(degrees)
}
