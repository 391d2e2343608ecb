//! Runtime configuration for the Gemini client.

use super::error::{GeminiError, GeminiResult};

/// Environment variable holding the Gemini API key.
const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Runtime configuration describing how to reach the Gemini API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key sent with every request.
    pub api_key: String,
    /// REST endpoint base URL.
    pub base_url: String,
    /// Model identifier used for generation.
    pub model: String,
    /// Attempt budget for rate-limited requests.
    pub max_attempts: u32,
    /// Initial backoff in milliseconds before retrying a rate-limited request.
    pub initial_backoff_ms: u64,
}

impl GeminiConfig {
    /// Construct a configuration from an explicit key, endpoint and model.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
            max_attempts: 3,
            initial_backoff_ms: 500,
        }
    }

    /// Override the retry budget used for rate-limited requests.
    pub fn with_retry(mut self, max_attempts: u32, initial_backoff_ms: u64) -> Self {
        // A zero budget would never send anything.
        self.max_attempts = max_attempts.max(1);
        self.initial_backoff_ms = initial_backoff_ms;
        self
    }

    /// Read the API key from the environment, combining it with endpoint
    /// settings from the application configuration.
    pub fn from_env(base_url: impl Into<String>, model: impl Into<String>) -> GeminiResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| GeminiError::MissingEnvVar { var: API_KEY_ENV })?;
        Ok(Self::new(api_key, base_url, model))
    }
}
