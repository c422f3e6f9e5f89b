use rand::seq::SliceRandom;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use validator::Validate;

use crate::models::{miles_to_meters, Coordinate, RestaurantRecord, SearchRequest, SearchSummary};
use crate::services::{BusinessQuery, BusinessSearch, GeocodeError, Geocoder};

/// Why a search was turned away before producing a summary. The Display text
/// is exactly what the user sees.
#[derive(Debug, Error)]
pub enum SearchRejection {
    #[error("Please enter food type, location, and distance.")]
    MissingInput,
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },
    #[error("Error geocoding location '{query}': {source}")]
    Geocoding {
        query: String,
        source: GeocodeError,
    },
    #[error("Please enter a valid distance (numeric value).")]
    InvalidDistance,
}

/// Most recent successful search. Empty at startup, overwritten by every
/// completed search (an empty result list included), never cleared.
#[derive(Debug, Default)]
pub struct SearchSession {
    pub food_type: Option<String>,
    pub coordinate: Option<Coordinate>,
    pub restaurants: Vec<RestaurantRecord>,
}

/// Sequences the geocoding and business-search collaborators and holds the
/// session state the random pick draws from.
#[derive(Clone)]
pub struct SearchController {
    geocoder: Arc<dyn Geocoder>,
    business_search: Arc<dyn BusinessSearch>,
    session: Arc<RwLock<SearchSession>>,
}

impl SearchController {
    pub fn new(geocoder: Arc<dyn Geocoder>, business_search: Arc<dyn BusinessSearch>) -> Self {
        Self {
            geocoder,
            business_search,
            session: Arc::new(RwLock::new(SearchSession::default())),
        }
    }

    /// Runs one search. Validation order is fixed: non-empty fields, then
    /// geocoding, then the distance parse, then the restaurant lookup. Every
    /// rejection leaves the session untouched; a completed search overwrites
    /// it, even when nothing was found.
    pub async fn pick_food(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchSummary, SearchRejection> {
        if request.validate().is_err() {
            return Err(SearchRejection::MissingInput);
        }

        let coordinate = match self.geocoder.geocode(&request.city_name).await {
            Ok(Some(coordinate)) => coordinate,
            Ok(None) => {
                return Err(SearchRejection::LocationNotFound {
                    query: request.city_name.clone(),
                })
            }
            Err(source) => {
                return Err(SearchRejection::Geocoding {
                    query: request.city_name.clone(),
                    source,
                })
            }
        };

        let distance_miles = match request.distance_miles.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value > 0.0 => value,
            _ => return Err(SearchRejection::InvalidDistance),
        };

        let query = BusinessQuery {
            term: request.food_type.clone(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            radius_meters: miles_to_meters(distance_miles),
        };

        // Collaborator failures never reach the user as errors: the reason
        // goes to the operator log and the search reports no results.
        let restaurants = match self.business_search.search_open(&query).await {
            Ok(restaurants) => restaurants,
            Err(err) => {
                tracing::error!("restaurant search failed: {err:#}");
                Vec::new()
            }
        };

        let mut session = self.session.write().await;
        session.food_type = Some(request.food_type.clone());
        session.coordinate = Some(coordinate);
        session.restaurants = restaurants.clone();

        Ok(SearchSummary {
            food_type: request.food_type.clone(),
            coordinate,
            distance_miles,
            restaurants,
        })
    }

    /// Uniform pick from the held results; `None` until a search has stored
    /// a non-empty list.
    pub async fn choose_random(&self) -> Option<RestaurantRecord> {
        let session = self.session.read().await;
        session.restaurants.choose(&mut rand::thread_rng()).cloned()
    }
}
