//! Upstream chat-completion client.
//!
//! The relay talks to the completion service through [`CompletionProvider`].
//! [`openai::OpenAiClient`] is the production implementation; tests substitute
//! their own.
//!
//! Every request carries the same three messages: the assistant role, the
//! business context, and the visitor's raw text (see [`build_messages`]).

pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompt::{ASSISTANT_ROLE, BUSINESS_CONTEXT};

/// Default completion model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default API base URL (without the `/chat/completions` suffix).
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Errors raised while talking to the completion service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Network(String),

    #[error("Upstream returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Upstream response malformed: {0}")]
    MalformedResponse(String),
}

/// Speaker of a completion message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One entry of the `messages` array sent upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionMessage {
    pub role: Role,
    pub content: String,
}

impl CompletionMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Build the message list for a visitor's question.
pub fn build_messages(user_message: &str) -> Vec<CompletionMessage> {
    vec![
        CompletionMessage::new(Role::System, ASSISTANT_ROLE),
        CompletionMessage::new(Role::System, BUSINESS_CONTEXT),
        CompletionMessage::new(Role::User, user_message),
    ]
}

/// Something that can answer a visitor's message.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Return the assistant's reply to `user_message`.
    async fn complete(&self, user_message: &str) -> Result<String, UpstreamError>;
}
