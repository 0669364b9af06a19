//! Request and response bodies.

use asfalt_core::models::ChatMessage;
use serde::{Deserialize, Serialize};

/// `POST /api/chatbot/send` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendRequest {
    pub message: String,
    /// Accepted for compatibility with older widgets; the relay always uses
    /// its own business context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// `POST /api/chatbot/send` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendResponse {
    pub reply: String,
}

/// `POST /api/chat/store` request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRequest {
    pub chat_id: String,
    pub messages: Vec<ChatMessage>,
}

/// `{ "message": ... }` acknowledgement or not-found body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// `{ "error": ... }` failure body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
