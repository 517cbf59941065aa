//! Runtime configuration for the generative text backend.

use std::{env, time::Duration};

/// Default Gemini REST endpoint prefix.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Default model used for plan skeletons and clarification questions.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Upper bound on a single generative request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the generative text service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiConfig {
    /// API key; `None` means offline (fallback-only) operation
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl AiConfig {
    /// Read configuration from the environment.
    ///
    /// - `GEMINI_API_KEY`: API key (unset or empty = offline)
    /// - `MILESYNC_GEMINI_MODEL`: model name
    /// - `MILESYNC_GEMINI_BASE_URL`: endpoint prefix
    /// - `MILESYNC_AI_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unparseable values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_empty("GEMINI_API_KEY"),
            model: non_empty("MILESYNC_GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: non_empty("MILESYNC_GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            timeout: non_empty("MILESYNC_AI_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }

    /// Drop the API key so every request takes the fallback path.
    pub fn offline(mut self) -> Self {
        self.api_key = None;
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
