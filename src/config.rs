use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub geocoder: GeocoderSettings,
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    pub base_url: String,
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                workers: num_cpus::get(),
            },
            geocoder: GeocoderSettings {
                base_url: "https://nominatim.openstreetmap.org".to_string(),
                user_agent: concat!("food_picker_service/", env!("CARGO_PKG_VERSION")).to_string(),
                timeout_secs: 10,
            },
            search: SearchSettings {
                base_url: "https://api.yelp.com".to_string(),
                // The credential only ever arrives via YELP_API_KEY.
                api_key: String::new(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Config::default();

        // Server configuration
        if let Ok(host) = env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            config.server.port = port.parse()?;
        }
        if let Ok(workers) = env::var("WORKERS") {
            config.server.workers = workers.parse()?;
        }

        // Geocoder configuration
        if let Ok(base_url) = env::var("GEOCODER_BASE_URL") {
            config.geocoder.base_url = base_url;
        }
        if let Ok(user_agent) = env::var("GEOCODER_USER_AGENT") {
            config.geocoder.user_agent = user_agent;
        }
        if let Ok(timeout_secs) = env::var("GEOCODER_TIMEOUT_SECS") {
            config.geocoder.timeout_secs = timeout_secs.parse()?;
        }

        // Business-search configuration
        if let Ok(base_url) = env::var("YELP_BASE_URL") {
            config.search.base_url = base_url;
        }
        if let Ok(api_key) = env::var("YELP_API_KEY") {
            config.search.api_key = api_key;
        }

        Ok(config)
    }
}
