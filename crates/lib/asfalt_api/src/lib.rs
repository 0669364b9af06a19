//! # asfalt_api
//!
//! HTTP relay for the Asfaltios support chat: forwards visitor messages to the
//! completion service and keeps an in-memory list of chat transcripts.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use asfalt_core::store::ChatStore;
use asfalt_core::upstream::CompletionProvider;
use axum::Router;
use axum::routing::{get, post};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{chat, chatbot, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Transcript store, shared by every request.
    pub store: Arc<RwLock<ChatStore>>,
    /// Completion service used by `POST /api/chatbot/send`.
    pub upstream: Arc<dyn CompletionProvider>,
}

impl AppState {
    /// State with a fresh, empty store.
    pub fn new(upstream: Arc<dyn CompletionProvider>) -> Self {
        Self {
            store: Arc::new(RwLock::new(ChatStore::new())),
            upstream,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_API_HEALTH, get(health::health_handler))
        .route(routes::POST_API_CHATBOT_SEND, post(chatbot::send_handler))
        .route(routes::POST_API_CHAT_STORE, post(chat::store_handler))
        .route(routes::GET_API_CHAT_ACTIVE, get(chat::list_active_handler))
        .route(
            routes::GET_API_CHAT_MESSAGES_ID,
            get(chat::get_messages_handler),
        )
        .layer(cors)
        .with_state(state)
}
