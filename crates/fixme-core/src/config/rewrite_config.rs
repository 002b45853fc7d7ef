use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote rewrite service configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriteConfig {
    /// Chat completions endpoint URL.
    pub endpoint: String,
    /// Model name sent with every request.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// API key. Falls back to `OPENAI_API_KEY` when absent.
    pub api_key: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the first attempt on network errors and 5xx responses.
    pub max_retries: u32,
    /// Initial backoff in milliseconds (doubles each retry).
    pub initial_backoff_ms: u64,
    /// Backoff ceiling in milliseconds.
    pub max_backoff_ms: u64,
}

impl RewriteConfig {
    /// The configured key, or the one from the environment.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(crate::constants::API_KEY_ENV).ok())
            .filter(|key| !key.trim().is_empty())
    }
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_ENDPOINT.to_string(),
            model: defaults::DEFAULT_MODEL.to_string(),
            temperature: defaults::DEFAULT_TEMPERATURE,
            api_key: None,
            timeout_secs: defaults::DEFAULT_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
        }
    }
}
