//! # asfalt_core
//!
//! Core domain logic for the Asfaltios support chat: the transcript data
//! model, the in-memory transcript store, the business system prompt, and the
//! upstream chat-completion client.

pub mod models;
pub mod prompt;
pub mod store;
pub mod upstream;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
