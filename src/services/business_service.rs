use anyhow::{bail, Context, Result};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;

use crate::config::SearchSettings;
use crate::models::RestaurantRecord;

/// The provider never returns more than this many results, and the session
/// never holds more.
const RESULT_LIMIT: usize = 5;

/// Parameters for one open-restaurant search. The radius is already in whole
/// meters; the coordinate comes from the geocoding step.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessQuery {
    pub term: String,
    pub latitude: f64,
    pub longitude: f64,
    pub radius_meters: u32,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait BusinessSearch: Send + Sync {
    async fn search_open(&self, query: &BusinessQuery) -> Result<Vec<RestaurantRecord>>;
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(default)]
    businesses: Vec<BusinessEntry>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct BusinessEntry {
    name: String,
    rating: Option<f64>,
    #[serde(default)]
    location: BusinessLocation,
}

#[derive(Debug, Default, Deserialize)]
struct BusinessLocation {
    address1: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    description: String,
}

fn records_from(payload: SearchPayload) -> Result<Vec<RestaurantRecord>> {
    if let Some(error) = payload.error {
        bail!("business search API error: {}", error.description);
    }

    Ok(payload
        .businesses
        .into_iter()
        .take(RESULT_LIMIT)
        .map(|business| RestaurantRecord {
            name: business.name,
            rating: business.rating,
            address: business.location.address1,
        })
        .collect())
}

#[derive(Clone)]
pub struct YelpBusinessSearch {
    http: reqwest::Client,
    settings: SearchSettings,
}

impl YelpBusinessSearch {
    pub fn new(http: reqwest::Client, settings: SearchSettings) -> Self {
        Self { http, settings }
    }
}

#[async_trait]
impl BusinessSearch for YelpBusinessSearch {
    async fn search_open(&self, query: &BusinessQuery) -> Result<Vec<RestaurantRecord>> {
        if self.settings.api_key.trim().is_empty() {
            bail!("search API key is not configured");
        }

        let url = format!("{}/v3/businesses/search", self.settings.base_url);
        let params = [
            ("term", query.term.clone()),
            ("latitude", query.latitude.to_string()),
            ("longitude", query.longitude.to_string()),
            ("radius", query.radius_meters.to_string()),
            ("limit", RESULT_LIMIT.to_string()),
            ("open_now", "true".to_string()),
        ];

        // The body is parsed before any status check: the provider reports
        // request problems through an `error` object in the payload.
        let payload: SearchPayload = self
            .http
            .get(&url)
            .bearer_auth(&self.settings.api_key)
            .query(&params)
            .send()
            .await
            .context("business search request failed")?
            .json()
            .await
            .context("business search returned a malformed payload")?;

        records_from(payload)
    }
}
