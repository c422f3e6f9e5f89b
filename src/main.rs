mod config;
mod handlers;
mod models;
mod routes;
mod services;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use handlers::health::not_found;
use routes::api;
use services::{
    BusinessSearch, Geocoder, NominatimGeocoder, SearchController, YelpBusinessSearch,
};

#[derive(Clone)]
pub struct AppState {
    pub controller: SearchController,
    pub config: Config,
    pub start_time: Instant,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => {
            info!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.search.api_key.trim().is_empty() {
        warn!("YELP_API_KEY is not set; restaurant searches will return no results");
    }

    info!("Starting Food Picker service on port {}", config.server.port);

    let http = reqwest::Client::new();
    let geocoder: Arc<dyn Geocoder> =
        Arc::new(NominatimGeocoder::new(http.clone(), config.geocoder.clone()));
    let business_search: Arc<dyn BusinessSearch> =
        Arc::new(YelpBusinessSearch::new(http, config.search.clone()));

    let state = AppState {
        controller: SearchController::new(geocoder, business_search),
        config: config.clone(),
        start_time: Instant::now(),
    };

    // Create HTTP server
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .route("/", web::get().to(handlers::index))
            .service(api::config())
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?;

    info!(
        "Server started successfully at http://{}:{}",
        config.server.host, config.server.port
    );

    // Run the server
    server.workers(config.server.workers).run().await
}
