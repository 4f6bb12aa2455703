//! Text generation — the external capability the chat relay delegates to.
//!
//! The relay only needs `prompt in, text out`. [`GenerationService`] is the
//! seam: the server wires in [`gemini::GeminiClient`], tests wire in mocks.
//!
//! # Public API
//!
//! - [`GenerationService`] — async text-in/text-out trait
//! - [`GenerationError`] — every way a generation call can fail
//! - [`config::GenerationConfig`] — provider settings resolved from env vars
//! - [`gemini::GeminiClient`] — Google Gemini `generateContent` provider

pub mod config;
pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a generation call.
///
/// The `Display` output of each variant is the human-readable description
/// surfaced to chat clients.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("{status} {message}")]
    Api { status: u16, message: String },

    #[error("Prompt blocked: {0}")]
    Blocked(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

/// A text generation provider bound to a fixed model.
///
/// Implementations hold only immutable configuration and must be safe to call
/// concurrently.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate a reply for `prompt` using the provider's default parameters.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Model identifier, for logging.
    fn model(&self) -> &str;
}
