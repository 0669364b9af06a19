//! Chat domain models.
//!
//! These types are shared by the relay (as JSON request/response bodies) and
//! the widget, so they carry the camelCase wire names directly.

use serde::{Deserialize, Serialize};

/// A single chat bubble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub text: String,
    pub is_user: bool,
}

impl ChatMessage {
    /// Message typed by the visitor.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: true,
        }
    }

    /// Message produced by the assistant (or the widget itself).
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_user: false,
        }
    }
}

/// Full ordered message history for one chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTranscript {
    pub chat_id: String,
    pub messages: Vec<ChatMessage>,
}
