//! HTTP client with retry, exponential backoff, timeout, and cancellation.

use std::time::Duration;

use fixme_core::config::RewriteConfig;
use fixme_core::errors::{FixMeResult, RewriteError};
use fixme_core::models::RewriteOptions;
use fixme_core::traits::IRewriter;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::prompt::system_prompt;
use crate::protocol::{ChatMessage, ChatRequest, ChatResponse};

/// Outcome of a single HTTP attempt.
enum Attempt {
    Done(String),
    Retry(RewriteError),
    Fail(RewriteError),
}

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    config: RewriteConfig,
    api_key: Option<String>,
    http: reqwest::Client,
}

impl ChatCompletionsClient {
    /// Build a client. The API key comes from the config or `OPENAI_API_KEY`;
    /// a missing key only fails once a rewrite is attempted.
    pub fn new(config: RewriteConfig) -> FixMeResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .build()
            .map_err(|e| RewriteError::Network {
                reason: e.to_string(),
            })?;
        Ok(Self {
            api_key: config.resolve_api_key(),
            config,
            http,
        })
    }

    /// Override the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Forget the API key. Rewrites fail with `ApiKeyMissing` until one is set.
    pub fn clear_api_key(&mut self) {
        self.api_key = None;
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn config(&self) -> &RewriteConfig {
        &self.config
    }

    async fn send_once(&self, key: &str, request: &ChatRequest<'_>) -> Attempt {
        let response = match self
            .http
            .post(&self.config.endpoint)
            .bearer_auth(key)
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                return Attempt::Retry(RewriteError::Network {
                    reason: e.to_string(),
                })
            }
        };

        let status = response.status();
        debug!(status = status.as_u16(), "rewrite API responded");
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Attempt::Retry(RewriteError::Network {
                    reason: e.to_string(),
                })
            }
        };

        if status.is_server_error() {
            return Attempt::Retry(RewriteError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) if status.is_success() => {
                return Attempt::Fail(RewriteError::InvalidResponse {
                    reason: e.to_string(),
                })
            }
            Err(_) => {
                return Attempt::Fail(RewriteError::Http {
                    status: status.as_u16(),
                    body,
                })
            }
        };

        if let Some(error) = parsed.error {
            return Attempt::Fail(RewriteError::Api {
                message: error.message,
            });
        }
        if !status.is_success() {
            return Attempt::Fail(RewriteError::Http {
                status: status.as_u16(),
                body,
            });
        }

        match parsed.first_content() {
            Some(content) => Attempt::Done(content.to_string()),
            None => Attempt::Fail(RewriteError::InvalidResponse {
                reason: "response has no message content".to_string(),
            }),
        }
    }
}

impl IRewriter for ChatCompletionsClient {
    async fn rewrite(
        &self,
        text: &str,
        options: RewriteOptions,
        cancel: &CancellationToken,
    ) -> FixMeResult<String> {
        let key = self.api_key.as_deref().ok_or(RewriteError::ApiKeyMissing)?;
        let prompt = system_prompt(options);
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt,
                },
                ChatMessage {
                    role: "user",
                    content: text,
                },
            ],
            temperature: self.config.temperature,
        };

        let max_backoff = Duration::from_millis(self.config.max_backoff_ms);
        let mut backoff = Duration::from_millis(self.config.initial_backoff_ms);
        let mut last_err = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                debug!(
                    "rewrite: retry attempt {}/{} after {:?}",
                    attempt, self.config.max_retries, backoff
                );
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(RewriteError::Cancelled.into()),
                    _ = tokio::time::sleep(backoff) => {}
                }
                backoff = (backoff * 2).min(max_backoff);
            }

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(RewriteError::Cancelled.into()),
                outcome = self.send_once(key, &request) => outcome,
            };

            match outcome {
                Attempt::Done(content) => return Ok(content),
                Attempt::Fail(e) => return Err(e.into()),
                Attempt::Retry(e) => {
                    warn!(attempt, error = %e, "rewrite request failed");
                    last_err = Some(e);
                }
            }
        }

        Err(last_err
            .unwrap_or(RewriteError::Network {
                reason: "all retries exhausted".to_string(),
            })
            .into())
    }

    fn name(&self) -> &str {
        &self.config.model
    }
}
