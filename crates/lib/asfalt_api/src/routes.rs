//! Route paths served by [`crate::router`].

pub const GET_API_HEALTH: &str = "/api/health";
pub const POST_API_CHATBOT_SEND: &str = "/api/chatbot/send";
pub const POST_API_CHAT_STORE: &str = "/api/chat/store";
pub const GET_API_CHAT_ACTIVE: &str = "/api/chat/active";
pub const GET_API_CHAT_MESSAGES_ID: &str = "/api/chat/messages/{chat_id}";
