//! Application error types.

use asfalt_core::store::StoreError;
use asfalt_core::upstream::UpstreamError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::{ErrorResponse, MessageResponse};

/// Body returned for any completion failure. Upstream detail is never sent.
pub const UPSTREAM_FAILURE_MESSAGE: &str = "Error communicating with AI";

/// Body returned for an unknown chat id.
pub const CHAT_NOT_FOUND_MESSAGE: &str = "Chat not found";

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(m) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: m })).into_response()
            }
            AppError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageResponse {
                    message: CHAT_NOT_FOUND_MESSAGE.to_string(),
                }),
            )
                .into_response(),
            AppError::Upstream(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: UPSTREAM_FAILURE_MESSAGE.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(chat_id) => AppError::NotFound(chat_id),
        }
    }
}
