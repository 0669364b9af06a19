//! Relay configuration.

use asfalt_core::upstream::openai::OpenAiClient;
use thiserror::Error;

pub use asfalt_core::upstream::{DEFAULT_BASE_URL as DEFAULT_UPSTREAM_URL, DEFAULT_MODEL};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OpenAI API key is not set (OPENAI_API_KEY)")]
    MissingApiKey,
}

/// Configuration for the relay server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:5000").
    pub bind_addr: String,
    /// Base URL of the completion API, without `/chat/completions`.
    pub upstream_url: String,
    /// Completion model identifier.
    pub model: String,
    /// Bearer credential for the completion API.
    pub api_key: String,
}

impl ApiConfig {
    /// Completion client for the configured upstream.
    pub fn completion_client(&self) -> OpenAiClient {
        OpenAiClient::new(&self.upstream_url, &self.api_key, &self.model)
    }
}

/// Accept a credential only if it is present and not blank.
pub fn require_api_key(value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_rejected() {
        assert_eq!(require_api_key(None), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn blank_key_is_rejected() {
        assert_eq!(
            require_api_key(Some("   ".into())),
            Err(ConfigError::MissingApiKey)
        );
        assert_eq!(require_api_key(Some(String::new())), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn present_key_is_kept_verbatim() {
        assert_eq!(require_api_key(Some("sk-test".into())), Ok("sk-test".into()));
    }
}
