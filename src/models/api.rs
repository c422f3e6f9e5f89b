use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Coordinate, RestaurantRecord, SearchSummary};

/// The three text fields of the search form. Distance arrives as text and is
/// parsed by the controller, so a malformed value is reported in its place in
/// the validation sequence rather than at deserialization time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[validate(length(min = 1))]
    pub food_type: String,
    #[validate(length(min = 1))]
    pub city_name: String,
    #[validate(length(min = 1))]
    pub distance_miles: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub search_id: Uuid,
    pub display: String,
    pub food_type: String,
    pub coordinate: Coordinate,
    pub distance_miles: f64,
    pub restaurants: Vec<RestaurantRecord>,
    pub timestamp: DateTime<Utc>,
}

impl SearchResponse {
    pub fn from_summary(summary: SearchSummary) -> Self {
        Self {
            search_id: Uuid::new_v4(),
            display: summary.render(),
            food_type: summary.food_type,
            coordinate: summary.coordinate,
            distance_miles: summary.distance_miles,
            restaurants: summary.restaurants,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RandomPickResponse {
    pub display: String,
    pub restaurant: RestaurantRecord,
    pub timestamp: DateTime<Utc>,
}

impl RandomPickResponse {
    pub fn for_pick(restaurant: RestaurantRecord) -> Self {
        Self {
            display: format!(
                "Randomly Chosen Restaurant:\nName: {}\nAddress: {}",
                restaurant.name,
                restaurant.address_label()
            ),
            restaurant,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
            timestamp: Utc::now(),
        }
    }
}
