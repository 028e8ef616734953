use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("request to Gemini failed: {0}")]
    Http(reqwest::Error),
    #[error("Gemini API error ({status}): {body}")]
    Api { status: u16, body: String },
    #[error("error decoding Gemini response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Gemini response contained no text")]
    EmptyResponse,
}

// The request URL is dropped so error text never carries the endpoint or credentials.
impl From<reqwest::Error> for GeminiError {
    fn from(error: reqwest::Error) -> Self {
        GeminiError::Http(error.without_url())
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    pub role: Option<String>,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self::with_role("user", text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::with_role("model", text)
    }

    fn with_role(role: &str, text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Text { text: text.into() }],
            role: Some(role.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    // Function calls, inline data and anything else we never send.
    Other(Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Text of the first part of the first candidate, if the model produced any.
    pub fn first_text(&self) -> Option<&str> {
        let content = self.candidates.first()?.content.as_ref()?;
        match content.parts.first()? {
            Part::Text { text } => Some(text.as_str()),
            Part::Other(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    pub prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount", default)]
    pub candidates_token_count: u32,
    #[serde(rename = "totalTokenCount", default)]
    pub total_token_count: u32,
}

/// Anything that turns a Gemini-style transcript into a single text answer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate_text(
        &self,
        contents: Vec<Content>,
        config: GenerationConfig,
    ) -> Result<String, GeminiError>;
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        tracing::debug!(
            model = %self.model,
            contents = request.contents.len(),
            temperature = request.generation_config.temperature,
            "sending Gemini request"
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body: response_text,
            });
        }

        tracing::debug!("Gemini API response (truncated): {}...", truncate(&response_text, 500));
        let result: GenerateContentResponse = serde_json::from_str(&response_text)?;
        if let Some(usage) = &result.usage_metadata {
            tracing::debug!(
                prompt_tokens = usage.prompt_token_count,
                completion_tokens = usage.candidates_token_count,
                total_tokens = usage.total_token_count,
                "Gemini token usage"
            );
        }
        Ok(result)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(
        &self,
        contents: Vec<Content>,
        config: GenerationConfig,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest {
            contents,
            generation_config: config,
        };
        let response = self.generate_content(&request).await?;
        response
            .first_text()
            .map(str::to_string)
            .ok_or(GeminiError::EmptyResponse)
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
