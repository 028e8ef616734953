// src/handlers/aimodel.rs
//! Trip conversation endpoint

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::Json,
    routing::post,
    Router,
};
use std::sync::Arc;

use crate::models::chat::{AiModelRequest, AiModelResponse};
use crate::AppState;

pub fn aimodel_routes() -> Router {
    Router::new().route("/api/aimodel", post(aimodel_handler))
}

/// POST /api/aimodel - next assistant turn, or the final plan when `isFinal` is set.
///
/// Always answers 200: an unreadable body is treated as an empty conversation.
pub async fn aimodel_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<AiModelRequest>, JsonRejection>,
) -> Json<AiModelResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable /api/aimodel body, answering as empty conversation");
            AiModelRequest::default()
        }
    };

    tracing::debug!(
        messages = request.messages.len(),
        is_final = request.is_final,
        "planning turn"
    );

    Json(state.trip_agent.respond(&request).await)
}
