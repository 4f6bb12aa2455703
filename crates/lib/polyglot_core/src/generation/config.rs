//! Generation provider configuration.
//!
//! Credentials are supplied at process start (CLI flags or env vars);
//! nothing is compiled in.

use std::time::Duration;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini REST API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Resolved configuration for the Gemini provider.
#[derive(Clone)]
pub struct GenerationConfig {
    /// Gemini API key.
    pub api_key: String,
    /// Fixed model identifier, e.g. `gemini-1.5-flash`.
    pub model: String,
    /// API base URL (overridable for proxies and tests).
    pub base_url: String,
    /// Per-request timeout. `None` keeps the HTTP client's default.
    pub request_timeout: Option<Duration>,
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for GenerationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl GenerationConfig {
    /// Config with default model and base URL for the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}
