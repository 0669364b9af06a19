//! Request handlers.

pub mod chat;
pub mod chatbot;
pub mod health;
