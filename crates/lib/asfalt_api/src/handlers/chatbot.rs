//! Chatbot relay handler.
//!
//! Forwards the visitor's message to the completion service wrapped in the
//! fixed Asfaltios system prompt. Any caller-supplied `context` is dropped.

use axum::Json;
use axum::extract::State;
use tracing::{debug, error};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::models::{SendRequest, SendResponse};

/// `POST /api/chatbot/send` — ask the assistant and return its reply.
pub async fn send_handler(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<SendRequest>,
) -> AppResult<Json<SendResponse>> {
    if body.message.is_empty() {
        return Err(AppError::Validation("message must not be empty".into()));
    }
    if body.context.is_some() {
        debug!("ignoring caller-supplied context");
    }

    let reply = state.upstream.complete(&body.message).await.map_err(|e| {
        error!(error = %e, "error communicating with completion API");
        AppError::from(e)
    })?;

    Ok(Json(SendResponse { reply }))
}
