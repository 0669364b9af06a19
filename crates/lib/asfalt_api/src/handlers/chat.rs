//! Transcript store handlers.

use asfalt_core::models::{ChatMessage, ChatTranscript};
use axum::Json;
use axum::extract::{Path, State};
use tracing::{debug, info};

use crate::AppState;
use crate::error::AppResult;
use crate::extract::ApiJson;
use crate::models::{MessageResponse, StoreRequest};

/// `POST /api/chat/store` — append a transcript snapshot. Always acknowledged.
pub async fn store_handler(
    State(state): State<AppState>,
    ApiJson(body): ApiJson<StoreRequest>,
) -> AppResult<Json<MessageResponse>> {
    let count = body.messages.len();
    let total = {
        let mut store = state.store.write().await;
        store.append(body.chat_id.clone(), body.messages);
        store.len()
    };
    info!(chat_id = %body.chat_id, messages = count, total, "chat stored");

    Ok(Json(MessageResponse {
        message: "Chat saved successfully!".to_string(),
    }))
}

/// `GET /api/chat/active` — every stored transcript, oldest first.
pub async fn list_active_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ChatTranscript>>> {
    let chats = state.store.read().await.list_all();
    Ok(Json(chats))
}

/// `GET /api/chat/messages/{chat_id}` — messages of the first transcript
/// stored under `chat_id`.
pub async fn get_messages_handler(
    State(state): State<AppState>,
    Path(chat_id): Path<String>,
) -> AppResult<Json<Vec<ChatMessage>>> {
    let transcript = state.store.read().await.get_by_chat_id(&chat_id);
    if transcript.is_err() {
        debug!(chat_id = %chat_id, "chat not found");
    }
    Ok(Json(transcript?.messages))
}
