//! LLM client configuration, loaded from environment variables.

use crate::errors::{Result, must_env, validate_http_endpoint};

/// Default OpenRouter endpoint.
const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default model identifier; small and fast, fits interactive use.
const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";

/// Configuration for chat-completion calls.
#[derive(Clone, Debug)]
pub struct LlmConfig {
    /// Model identifier (e.g. `anthropic/claude-3-haiku`).
    pub model: String,
    /// API endpoint base, e.g. `https://openrouter.ai/api/v1`.
    pub endpoint: String,
    /// API key; required.
    pub api_key: String,
    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Builds the config from environment variables.
    ///
    /// - `OPENROUTER_API_KEY` (required; a missing key is a fatal setup error)
    /// - `OPENROUTER_BASE_URL` (default `https://openrouter.ai/api/v1`)
    /// - `LLM_MODEL` (default `anthropic/claude-3-haiku`)
    ///
    /// # Errors
    /// Returns [`crate::ConfigError::MissingVar`] when the API key is absent
    /// and [`crate::ConfigError::InvalidFormat`] for a non-HTTP endpoint.
    pub fn from_env() -> Result<Self> {
        let api_key = must_env("OPENROUTER_API_KEY")?;
        let endpoint = std::env::var("OPENROUTER_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        validate_http_endpoint("OPENROUTER_BASE_URL", &endpoint)?;

        let model = std::env::var("LLM_MODEL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            model,
            endpoint,
            api_key,
            max_tokens: Some(800),
            temperature: Some(0.3),
            timeout_secs: 10,
        })
    }
}
