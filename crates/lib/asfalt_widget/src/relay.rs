//! Relay client used by the widget.

use asfalt_core::models::ChatMessage;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the relay listens during local development.
pub const DEFAULT_RELAY_URL: &str = "http://localhost:5000";

/// Errors talking to the relay.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Relay returned {0}")]
    Status(u16),
}

/// The two relay calls the widget makes.
#[async_trait]
pub trait Relay: Send + Sync {
    /// Ask the assistant; returns its reply.
    async fn send(&self, message: &str) -> Result<String, WidgetError>;

    /// Save a snapshot of the conversation.
    async fn store(&self, chat_id: &str, messages: &[ChatMessage]) -> Result<(), WidgetError>;
}

#[derive(Serialize)]
struct SendBody<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
}

#[derive(Deserialize)]
struct ReplyBody {
    reply: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StoreBody<'a> {
    chat_id: &'a str,
    messages: &'a [ChatMessage],
}

/// [`Relay`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: Client,
    base_url: String,
}

impl HttpRelay {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(DEFAULT_RELAY_URL)
    }
}

#[async_trait]
impl Relay for HttpRelay {
    async fn send(&self, message: &str) -> Result<String, WidgetError> {
        let resp = self
            .client
            .post(self.url("/api/chatbot/send"))
            .json(&SendBody {
                message,
                context: None,
            })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(WidgetError::Status(resp.status().as_u16()));
        }
        let body: ReplyBody = resp.json().await?;
        Ok(body.reply)
    }

    async fn store(&self, chat_id: &str, messages: &[ChatMessage]) -> Result<(), WidgetError> {
        let resp = self
            .client
            .post(self.url("/api/chat/store"))
            .json(&StoreBody { chat_id, messages })
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(WidgetError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}
