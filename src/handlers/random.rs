use actix_web::{web, HttpResponse, Result};

use crate::models::{ErrorResponse, RandomPickResponse};
use crate::AppState;

pub async fn random_restaurant(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.controller.choose_random().await {
        Some(restaurant) => Ok(HttpResponse::Ok().json(RandomPickResponse::for_pick(restaurant))),
        None => Ok(HttpResponse::BadRequest().json(ErrorResponse::new(
            "No restaurants available. Run a search first.",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{Coordinate, SearchRequest};
    use crate::services::{MockBusinessSearch, MockGeocoder, SearchController};
    use actix_web::{test, web, App};
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Instant;

    async fn post_random(state: AppState) -> (u16, Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .route("/api/random", web::post().to(random_restaurant)),
        )
        .await;

        let request = test::TestRequest::post().uri("/api/random").to_request();
        let response = test::call_service(&app, request).await;
        let status = response.status().as_u16();
        (status, test::read_body_json(response).await)
    }

    #[actix_rt::test]
    async fn pick_without_a_search_is_instructive() {
        let state = AppState {
            controller: SearchController::new(
                Arc::new(MockGeocoder::new()),
                Arc::new(MockBusinessSearch::new()),
            ),
            config: Config::default(),
            start_time: Instant::now(),
        };

        let (status, body) = post_random(state).await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "No restaurants available. Run a search first.");
    }

    #[actix_rt::test]
    async fn pick_returns_a_held_restaurant() {
        let mut geocoder = MockGeocoder::new();
        geocoder.expect_geocode().returning(|_| {
            Ok(Some(Coordinate {
                latitude: 30.2672,
                longitude: -97.7431,
            }))
        });
        let mut business_search = MockBusinessSearch::new();
        business_search.expect_search_open().returning(|_| {
            Ok(vec![crate::models::RestaurantRecord {
                name: "Taqueria Uno".to_string(),
                rating: Some(4.5),
                address: Some("1 Main St".to_string()),
            }])
        });

        let controller = SearchController::new(Arc::new(geocoder), Arc::new(business_search));
        controller
            .pick_food(&SearchRequest {
                food_type: "tacos".to_string(),
                city_name: "Austin".to_string(),
                distance_miles: "2".to_string(),
            })
            .await
            .unwrap();

        let state = AppState {
            controller,
            config: Config::default(),
            start_time: Instant::now(),
        };

        let (status, body) = post_random(state).await;
        assert_eq!(status, 200);
        assert_eq!(
            body["display"],
            "Randomly Chosen Restaurant:\nName: Taqueria Uno\nAddress: 1 Main St"
        );
        assert_eq!(body["restaurant"]["name"], "Taqueria Uno");
    }
}
