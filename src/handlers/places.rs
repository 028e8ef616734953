// src/handlers/places.rs
//! Place photo lookup for hotel and activity cards

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::Json,
    routing::post,
    Router,
};
use std::sync::Arc;

use crate::models::place::{PlaceDetailRequest, PlaceDetailResponse};
use crate::AppState;

pub fn places_routes() -> Router {
    Router::new().route("/api/google-place-detail", post(place_detail_handler))
}

/// POST /api/google-place-detail - photo URL for a place name, or the placeholder image.
pub async fn place_detail_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<PlaceDetailRequest>, JsonRejection>,
) -> Json<PlaceDetailResponse> {
    let place_name = payload
        .ok()
        .and_then(|Json(request)| request.place_name)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    let Some(place_name) = place_name else {
        return Json(PlaceDetailResponse::placeholder("Place name is required"));
    };

    let Some(client) = state.places_client.as_ref() else {
        tracing::warn!("Google Places API key not configured, returning placeholder");
        return Json(PlaceDetailResponse::placeholder("Google Places API key not configured"));
    };

    match client.photo_url(&place_name).await {
        Ok(url) => Json(PlaceDetailResponse::found(url)),
        Err(e) => {
            tracing::warn!(place = %place_name, error = %e, "place photo lookup failed");
            Json(PlaceDetailResponse::placeholder(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{app_with, local_app, post_json};
    use crate::places_client::PlacesClient;
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_missing_key_returns_placeholder() {
        let (status, body) = post_json(local_app(), "/api/google-place-detail", json!({"placeName": "Taj Mahal"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "/placeholder.svg");
        assert_eq!(body["error"], "Google Places API key not configured");
    }

    #[tokio::test]
    async fn test_missing_place_name_returns_placeholder() {
        let (status, body) = post_json(local_app(), "/api/google-place-detail", json!({})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "/placeholder.svg");
        assert_eq!(body["error"], "Place name is required");
    }

    #[tokio::test]
    async fn test_upstream_failure_returns_placeholder() {
        let client = PlacesClient::new("key".to_string()).with_base_url("http://127.0.0.1:9");
        let (status, body) = post_json(app_with(Some(client)), "/api/google-place-detail", json!({"placeName": "Taj Mahal"})).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["url"], "/placeholder.svg");
        assert!(body["error"].as_str().unwrap().starts_with("Failed to fetch place details"));
    }
}
