//! Chat widget state machine.
//!
//! Holds everything the chat window renders: whether it is open, the message
//! list, the pending input, and the typing indicator. [`ChatWidget::send`]
//! runs one full turn: ask the relay, show the reply, then store the
//! conversation snapshot.

use asfalt_core::models::ChatMessage;
use tracing::{debug, error};

use crate::relay::{Relay, WidgetError};

/// First bubble shown in every new widget.
pub const GREETING: &str = "Hi there! 👋 How can I help you? 😊";

/// Bubble shown when a turn fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

/// Result of [`ChatWidget::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was blank; nothing happened.
    Skipped,
    /// Reply shown and snapshot stored.
    Delivered,
    /// Something failed; the fallback bubble was shown.
    Failed,
}

#[derive(Debug, Clone)]
pub struct ChatWidget {
    is_open: bool,
    messages: Vec<ChatMessage>,
    input: String,
    is_typing: bool,
    chat_id: String,
}

impl ChatWidget {
    /// New closed widget with a chat id taken from the current time.
    pub fn new() -> Self {
        Self::with_chat_id(chrono::Utc::now().timestamp_millis().to_string())
    }

    pub fn with_chat_id(chat_id: impl Into<String>) -> Self {
        Self {
            is_open: false,
            messages: vec![ChatMessage::bot(GREETING)],
            input: String::new(),
            is_typing: false,
            chat_id: chat_id.into(),
        }
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    pub fn chat_id(&self) -> &str {
        &self.chat_id
    }

    /// Whether the send button is enabled.
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Send the pending input and store the resulting conversation.
    ///
    /// The user's text is sent as typed (untrimmed). Failures of either relay
    /// call are caught here, logged, and turned into a single
    /// [`FALLBACK_REPLY`] bubble; the typing indicator is always cleared.
    pub async fn send<R: Relay + ?Sized>(&mut self, relay: &R) -> SendOutcome {
        if !self.can_send() {
            return SendOutcome::Skipped;
        }

        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text.clone()));
        self.is_typing = true;

        let result = self.exchange(relay, &text).await;
        self.is_typing = false;

        match result {
            Ok(()) => SendOutcome::Delivered,
            Err(e) => {
                error!(chat_id = %self.chat_id, error = %e, "error sending message");
                self.messages.push(ChatMessage::bot(FALLBACK_REPLY));
                SendOutcome::Failed
            }
        }
    }

    async fn exchange<R: Relay + ?Sized>(
        &mut self,
        relay: &R,
        text: &str,
    ) -> Result<(), WidgetError> {
        let reply = relay.send(text).await?;
        self.messages.push(ChatMessage::bot(reply));
        self.is_typing = false;

        relay.store(&self.chat_id, &self.messages).await?;
        debug!(chat_id = %self.chat_id, messages = self.messages.len(), "snapshot stored");
        Ok(())
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}
