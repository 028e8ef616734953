// src/handlers/status.rs
use axum::{extract::Extension, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

pub fn status_routes() -> Router {
    Router::new().route("/api/status", get(api_status))
}

async fn api_status(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    let configured = |on: bool| if on { "configured" } else { "not_configured" };

    Json(json!({
        "status": "operational",
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "gemini_ai": configured(state.trip_agent.is_remote()),
            "google_places": configured(state.places_client.is_some())
        },
        "endpoints": {
            "status": "/api/status",
            "aimodel": "/api/aimodel",
            "place_detail": "/api/google-place-detail"
        }
    }))
}
