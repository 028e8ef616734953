// src/models/place.rs
use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder.svg";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetailRequest {
    #[serde(rename = "placeName", default)]
    pub place_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetailResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub url: String,
}

impl PlaceDetailResponse {
    pub fn found(url: String) -> Self {
        Self { error: None, url }
    }

    /// Placeholder image with the reason the lookup did not resolve.
    pub fn placeholder(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            url: PLACEHOLDER_IMAGE_URL.to_string(),
        }
    }
}
