use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::header::USER_AGENT;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::config::GeocoderSettings;
use crate::models::Coordinate;

/// Failures the geocoding provider can report. Each one surfaces to the user
/// with the original query attached; none of them aborts the process.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("the request timed out")]
    TimedOut,
    #[error("usage quota exceeded")]
    QuotaExceeded,
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl GeocodeError {
    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GeocodeError::TimedOut
        } else {
            GeocodeError::Transport(err.to_string())
        }
    }
}

/// Resolves a free-text place name to a coordinate pair. `Ok(None)` means the
/// provider answered but knows no such place.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, place_name: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimPlace {
    fn into_coordinate(self) -> Result<Coordinate, GeocodeError> {
        let latitude = self
            .lat
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("bad latitude {:?}", self.lat)))?;
        let longitude = self
            .lon
            .parse()
            .map_err(|_| GeocodeError::Malformed(format!("bad longitude {:?}", self.lon)))?;
        Ok(Coordinate {
            latitude,
            longitude,
        })
    }
}

#[derive(Clone)]
pub struct NominatimGeocoder {
    http: reqwest::Client,
    settings: GeocoderSettings,
}

impl NominatimGeocoder {
    pub fn new(http: reqwest::Client, settings: GeocoderSettings) -> Self {
        Self { http, settings }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, place_name: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let url = format!("{}/search", self.settings.base_url);

        let response = self
            .http
            .get(&url)
            .header(USER_AGENT, &self.settings.user_agent)
            .query(&[("q", place_name), ("format", "json"), ("limit", "1")])
            .timeout(Duration::from_secs(self.settings.timeout_secs))
            .send()
            .await
            .map_err(GeocodeError::from_transport)?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(GeocodeError::QuotaExceeded);
        }
        let response = response
            .error_for_status()
            .map_err(GeocodeError::from_transport)?;

        let places: Vec<NominatimPlace> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Malformed(e.to_string()))?;

        match places.into_iter().next() {
            Some(place) => Ok(Some(place.into_coordinate()?)),
            None => Ok(None),
        }
    }
}
