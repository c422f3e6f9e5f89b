use actix_web::{web, HttpResponse, Result};

use crate::models::{ErrorResponse, SearchRequest, SearchResponse};
use crate::services::SearchRejection;
use crate::AppState;

pub async fn search_restaurants(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> Result<HttpResponse> {
    match state.controller.pick_food(&req).await {
        Ok(summary) => {
            let response = SearchResponse::from_summary(summary);
            tracing::info!(
                search_id = %response.search_id,
                results = response.restaurants.len(),
                "search completed"
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(rejection) => {
            let body = ErrorResponse::new(rejection.to_string());
            match rejection {
                SearchRejection::Geocoding { .. } => {
                    tracing::warn!("geocoding failed: {rejection}");
                    Ok(HttpResponse::ServiceUnavailable().json(body))
                }
                _ => Ok(HttpResponse::BadRequest().json(body)),
            }
        }
    }
}
