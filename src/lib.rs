// lib.rs - trip planner service: conversation script, Gemini gateway, local fabricator, HTTP routes
pub mod agent;
pub mod config;
pub mod conversation;
pub mod currency;
pub mod gemini_client;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod places_client;

use axum::{Extension, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use agent::trip_agent::TripAgent;
use config::AppConfig;
use gemini_client::{GeminiClient, TextGenerator};
use places_client::PlacesClient;

// Immutable after startup; shared by every request.
pub struct AppState {
    pub trip_agent: TripAgent,
    pub places_client: Option<PlacesClient>,
}

impl AppState {
    /// Wires upstream clients from configuration; a missing key leaves that feature local.
    pub fn from_config(config: &AppConfig) -> Self {
        let generator = match &config.gemini_api_key {
            Some(api_key) => {
                let prefix: String = api_key.chars().take(6).collect();
                tracing::info!("Initializing Gemini AI client ({}), key {}...", config.gemini_model, prefix);
                let client = GeminiClient::new(api_key.clone(), config.gemini_model.clone());
                Some(Arc::new(client) as Arc<dyn TextGenerator>)
            }
            None => {
                tracing::warn!("GOOGLE_GEMINI_API_KEY not found. Trip plans will be generated locally.");
                None
            }
        };

        let places_client = match &config.places_api_key {
            Some(api_key) => {
                tracing::info!("Initializing Google Places client...");
                Some(PlacesClient::new(api_key.clone()))
            }
            None => {
                tracing::warn!("GOOGLE_PLACE_API_KEY not found. Place photos will use the placeholder image.");
                None
            }
        };

        Self {
            trip_agent: TripAgent::new(generator, config.request_delay),
            places_client,
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(handlers::aimodel::aimodel_routes())
        .merge(handlers::places::places_routes())
        .merge(handlers::status::status_routes())
        .layer(axum::middleware::from_fn(middleware::logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .layer(Extension(state))
}
