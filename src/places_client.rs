// src/places_client.rs
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/v1";
const FIELD_MASK: &str = "places.photos,places.displayName,places.id";
const PHOTO_MAX_PX: u32 = 1000;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("No places found")]
    NoPlaces,
    #[error("No photos found for this place")]
    NoPhotos,
    #[error("Google Places API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("Failed to fetch place details: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct SearchTextRequest<'a> {
    #[serde(rename = "textQuery")]
    text_query: &'a str,
}

#[derive(Debug, Deserialize, Default)]
pub struct SearchTextResponse {
    #[serde(default)]
    pub places: Vec<Place>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Place {
    pub id: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<DisplayName>,
    #[serde(default)]
    pub photos: Vec<PlacePhoto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayName {
    pub text: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlacePhoto {
    /// Resource name such as `places/<id>/photos/<ref>`.
    pub name: String,
}

impl PlacesClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Text search for a place; returns the raw Places payload.
    pub async fn search_text(&self, query: &str) -> Result<SearchTextResponse, PlacesError> {
        info!("📸 Searching Google Places for: '{}'", query);

        let response = self
            .client
            .post(format!("{}/places:searchText", self.base_url))
            .header("X-Goog-Api-Key", &self.api_key)
            .header("X-Goog-FieldMask", FIELD_MASK)
            .json(&SearchTextRequest { text_query: query })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Google Places API error: {}", body);
            return Err(PlacesError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let result = response.json::<SearchTextResponse>().await?;
        info!("✅ Found {} places for query: '{}'", result.places.len(), query);
        Ok(result)
    }

    /// Media URL of the first photo of the best match for `place_name`.
    pub async fn photo_url(&self, place_name: &str) -> Result<String, PlacesError> {
        let result = self.search_text(place_name).await?;
        let place = result.places.first().ok_or(PlacesError::NoPlaces)?;
        let photo = place.photos.first().ok_or(PlacesError::NoPhotos)?;
        Ok(self.media_url(&photo.name))
    }

    pub fn media_url(&self, photo_name: &str) -> String {
        format!(
            "{}/{}/media?maxHeightPx={}&maxWidthPx={}&key={}",
            self.base_url,
            photo_name,
            PHOTO_MAX_PX,
            PHOTO_MAX_PX,
            urlencoding::encode(&self.api_key)
        )
    }
}
