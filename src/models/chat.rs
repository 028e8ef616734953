// src/models/chat.rs
use serde::{Deserialize, Serialize};

use super::trip::GeneratedTrip;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    #[serde(alias = "model")]
    Assistant,
    #[serde(other)]
    Other,
}

/// One turn of the planning conversation as sent by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            ui: None,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            ui: None,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Widget the client should render after this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiHint {
    #[serde(rename = "groupSize")]
    GroupSize,
    #[serde(rename = "budget")]
    Budget,
    #[serde(rename = "tripDuration")]
    TripDuration,
    #[serde(rename = "Final")]
    Final,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiModelRequest {
    #[serde(default)]
    pub messages: Vec<Message>,
    #[serde(rename = "isFinal", default)]
    pub is_final: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AiModelResponse {
    pub resp: String,
    pub ui: Option<UiHint>,
    #[serde(flatten)]
    pub trip: Option<GeneratedTrip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_id: Option<String>,
}

impl AiModelResponse {
    pub fn conversation(resp: impl Into<String>, ui: Option<UiHint>) -> Self {
        Self {
            resp: resp.into(),
            ui,
            trip: None,
            trip_id: None,
        }
    }

    /// Final answer carrying a complete trip and a fresh session id.
    pub fn final_plan(resp: impl Into<String>, trip: GeneratedTrip) -> Self {
        Self {
            resp: resp.into(),
            ui: Some(UiHint::Final),
            trip: Some(trip),
            trip_id: Some(uuid::Uuid::new_v4().to_string()),
        }
    }
}
