//! Generative text service seam.
//!
//! Everything that talks to a text-completion API goes through the
//! [`TextGenerator`] trait so the decomposition pipeline can be driven by a
//! real client ([`GeminiClient`]), by [`OfflineGenerator`] when no API key is
//! configured, or by scripted stubs in tests.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
pub mod json;

pub use gemini::GeminiClient;
pub use json::extract_json;

/// Errors raised by a generative text backend.
#[derive(Error, Debug)]
pub enum AiError {
    /// No credentials configured; the caller should use its fallback
    #[error("Generative text service is not configured")]
    NotConfigured,

    /// Network/connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Non-2xx response from the provider
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response decoded but carried no text
    #[error("Empty response from generative text service")]
    EmptyResponse,

    /// Response body was not the expected envelope
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request exceeded its deadline
    #[error("Request timed out")]
    Timeout,
}

/// A backend that turns a prompt into free-form text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short provider name for logs.
    fn provider(&self) -> &str;

    /// Generate text for `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`AiError`] when the backend is unreachable, rejects the
    /// request, or answers without text.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

/// Generator used when no API key is available. Always fails, which routes
/// every request to the caller's fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineGenerator;

#[async_trait]
impl TextGenerator for OfflineGenerator {
    fn provider(&self) -> &str {
        "offline"
    }

    async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
        Err(AiError::NotConfigured)
    }
}
