// src/agent/trip_agent.rs
// Front door for /api/aimodel: one Gemini attempt, and a local answer for every way it can fail.
use crate::agent::fabricator::TripDetails;
use crate::agent::prompts::{final_plan_prompt, CONVERSATION_PROMPT};
use crate::conversation::{canned_response, select_ui_hint};
use crate::gemini_client::{Content, GeminiError, GenerationConfig, TextGenerator};
use crate::models::chat::{AiModelRequest, AiModelResponse, Message};
use crate::models::trip::GeneratedTrip;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

const CONVERSATION_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 1024,
};
const FINAL_PLAN_CONFIG: GenerationConfig = GenerationConfig {
    temperature: 0.2,
    max_output_tokens: 4096,
};
const AI_PLAN_READY: &str =
    "Your personalized trip plan is ready! Check out the detailed itinerary with real hotels and attractions.";

#[derive(Error, Debug)]
pub enum PlanError {
    #[error(transparent)]
    Gemini(#[from] GeminiError),
    #[error("model output is not a trip plan: {0}")]
    Json(#[from] serde_json::Error),
    #[error("model returned a plan without destination or days")]
    Incomplete,
}

pub struct TripAgent {
    generator: Option<Arc<dyn TextGenerator>>,
    request_delay: Duration,
}

impl TripAgent {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>, request_delay: Duration) -> Self {
        Self {
            generator,
            request_delay,
        }
    }

    /// Agent that never leaves the process.
    pub fn local() -> Self {
        Self::new(None, Duration::ZERO)
    }

    pub fn is_remote(&self) -> bool {
        self.generator.is_some()
    }

    /// Answers one planning turn. Never fails: every upstream problem ends in a local answer.
    pub async fn respond(&self, request: &AiModelRequest) -> AiModelResponse {
        let messages = request.messages.as_slice();

        let Some(generator) = self.generator.as_deref() else {
            info!("Gemini API key not configured, using local generation");
            return local_response(messages, request.is_final);
        };

        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }

        if request.is_final {
            match remote_plan(generator, messages).await {
                Ok(trip) => AiModelResponse::final_plan(AI_PLAN_READY, trip),
                Err(e) => {
                    warn!(error = %e, "Gemini trip plan unavailable, using local generation");
                    fabricated_plan(messages)
                }
            }
        } else {
            match generator
                .generate_text(conversation_contents(messages), CONVERSATION_CONFIG)
                .await
            {
                Ok(text) => AiModelResponse::conversation(text, select_ui_hint(messages)),
                Err(e) => {
                    warn!(error = %e, "Gemini conversation failed, using local fallback");
                    local_response(messages, false)
                }
            }
        }
    }
}

pub fn local_response(messages: &[Message], is_final: bool) -> AiModelResponse {
    if is_final {
        fabricated_plan(messages)
    } else {
        AiModelResponse::conversation(canned_response(messages), select_ui_hint(messages))
    }
}

fn fabricated_plan(messages: &[Message]) -> AiModelResponse {
    let details = TripDetails::extract(messages);
    info!(
        source = %details.source,
        destination = %details.destination,
        days = details.days,
        "Generating trip plan locally"
    );
    AiModelResponse::final_plan(details.summary(), details.build_trip())
}

async fn remote_plan(
    generator: &dyn TextGenerator,
    messages: &[Message],
) -> Result<GeneratedTrip, PlanError> {
    let contents = vec![Content::user(final_plan_prompt(messages))];
    let text = generator.generate_text(contents, FINAL_PLAN_CONFIG).await?;

    let mut trip: GeneratedTrip = serde_json::from_str(strip_code_fences(&text).as_str())?;
    if !trip.is_usable() {
        return Err(PlanError::Incomplete);
    }
    trip.normalize_prices();
    debug!(days = trip.itinerary.len(), "parsed Gemini trip plan");
    Ok(trip)
}

/// System prompt first, then the transcript with Gemini role names.
fn conversation_contents(messages: &[Message]) -> Vec<Content> {
    std::iter::once(Content::user(CONVERSATION_PROMPT))
        .chain(messages.iter().map(|m| {
            if m.is_user() {
                Content::user(m.content.clone())
            } else {
                Content::model(m.content.clone())
            }
        }))
        .collect()
}

/// Removes Markdown code fences the model likes to wrap JSON in.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}
