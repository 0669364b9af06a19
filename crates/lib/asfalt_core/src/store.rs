//! In-memory transcript store.
//!
//! Append-only and unindexed: every [`ChatStore::append`] adds a new entry,
//! even for a chat id that is already present, and lookups scan from the
//! front. Contents live for the lifetime of the process.

use thiserror::Error;

use crate::models::{ChatMessage, ChatTranscript};

/// Store lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Chat not found: {0}")]
    NotFound(String),
}

/// Ordered list of stored transcripts.
#[derive(Debug, Default)]
pub struct ChatStore {
    entries: Vec<ChatTranscript>,
}

impl ChatStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transcript. Never fails and never merges with an existing
    /// entry for the same chat id.
    pub fn append(&mut self, chat_id: impl Into<String>, messages: Vec<ChatMessage>) {
        self.entries.push(ChatTranscript {
            chat_id: chat_id.into(),
            messages,
        });
    }

    /// All transcripts in insertion order.
    pub fn list_all(&self) -> Vec<ChatTranscript> {
        self.entries.clone()
    }

    /// First transcript whose chat id equals `chat_id`.
    pub fn get_by_chat_id(&self, chat_id: &str) -> Result<ChatTranscript, StoreError> {
        self.entries
            .iter()
            .find(|t| t.chat_id == chat_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(chat_id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = ChatStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn append_then_get_returns_same_transcript() {
        let mut store = ChatStore::new();
        store.append("1", vec![ChatMessage::user("hi")]);
        let t = store.get_by_chat_id("1").unwrap();
        assert_eq!(
            t,
            ChatTranscript {
                chat_id: "1".into(),
                messages: vec![ChatMessage::user("hi")],
            }
        );
    }

    #[test]
    fn get_missing_on_empty_store_is_not_found() {
        let store = ChatStore::new();
        assert_eq!(
            store.get_by_chat_id("missing"),
            Err(StoreError::NotFound("missing".into()))
        );
    }

    #[test]
    fn each_append_grows_by_one() {
        let mut store = ChatStore::new();
        for i in 0..5 {
            store.append(i.to_string(), Vec::new());
            assert_eq!(store.len(), i + 1);
        }
    }

    #[test]
    fn duplicate_ids_append_and_lookup_returns_first() {
        let mut store = ChatStore::new();
        store.append("42", vec![ChatMessage::user("first")]);
        store.append("7", vec![ChatMessage::user("other")]);
        store.append("42", vec![ChatMessage::user("first"), ChatMessage::bot("second")]);

        assert_eq!(store.len(), 3);
        let t = store.get_by_chat_id("42").unwrap();
        assert_eq!(t.messages, vec![ChatMessage::user("first")]);
    }

    #[test]
    fn list_all_preserves_insertion_order_and_is_stable() {
        let mut store = ChatStore::new();
        store.append("b", Vec::new());
        store.append("a", Vec::new());
        let first = store.list_all();
        let second = store.list_all();
        assert_eq!(first, second);
        let ids: Vec<&str> = first.iter().map(|t| t.chat_id.as_str()).collect();
        assert_eq!(ids, ["b", "a"]);
    }

    #[test]
    fn lookup_is_exact_match() {
        let mut store = ChatStore::new();
        store.append("10", Vec::new());
        assert!(store.get_by_chat_id("1").is_err());
        assert!(store.get_by_chat_id("10 ").is_err());
    }
}
