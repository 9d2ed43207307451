//! OpenRouter chat-completions client.

use crate::wire::{ChatMessage, ChatRequest, ChatResponse};
use crate::{Completion, CompletionConfig};
use async_trait::async_trait;
use reqwest::Client;
use skald_core::CompletionRequest;
use skald_error::{CompletionError, CompletionErrorKind, ConfigError};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

/// Chat-completions client for OpenRouter-compatible endpoints.
///
/// Performs exactly one outbound POST per [`Completion::complete`] call,
/// bounded by the configured wall-clock timeout. The timeout cancels the
/// in-flight request; a cancelled call is reported as
/// [`CompletionErrorKind::TimedOut`].
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    client: Client,
    config: CompletionConfig,
}

impl OpenRouterClient {
    /// Creates a new client from an explicit configuration.
    pub fn new(config: CompletionConfig) -> Self {
        debug!(model = %config.model, "creating OpenRouter client");
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a new client with the API key from `OPENROUTER_API_KEY` and
    /// default parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self::new(CompletionConfig::from_env()?))
    }

    /// The active configuration.
    pub fn config(&self) -> &CompletionConfig {
        &self.config
    }

    /// Single upstream attempt: POST, status check, body parse, text
    /// extraction. The caller wraps this in the wall-clock timeout.
    async fn send(&self, body: &ChatRequest) -> Result<String, CompletionError> {
        let mut request = self
            .client
            .post(&self.config.base_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json");
        if let Some(referer) = &self.config.referer {
            request = request.header("HTTP-Referer", referer);
        }
        if let Some(title) = &self.config.title {
            request = request.header("X-Title", title);
        }

        let response = request.json(body).send().await.map_err(|e| {
            error!(error = ?e, "failed to send completion request");
            CompletionError::new(CompletionErrorKind::Transport(format!("request failed: {e}")))
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "completion service returned error");
            return Err(CompletionError::new(CompletionErrorKind::Status {
                status: status.as_u16(),
                message,
            }));
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "failed to parse completion response");
            CompletionError::new(CompletionErrorKind::Transport(format!(
                "failed to parse response: {e}"
            )))
        })?;

        match parsed.first_text() {
            Some(text) => {
                debug!(chars = text.len(), "received completion text");
                Ok(text.to_string())
            }
            None => {
                warn!("completion response carried no usable text");
                Err(CompletionError::new(CompletionErrorKind::EmptyResponse))
            }
        }
    }
}

#[async_trait]
impl Completion for OpenRouterClient {
    #[instrument(skip(self, req), fields(model = %self.config.model))]
    async fn complete(&self, req: &CompletionRequest) -> Result<String, CompletionError> {
        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: req.messages.iter().map(ChatMessage::from).collect(),
            temperature: req.temperature.unwrap_or(self.config.temperature),
            max_tokens: req.max_tokens.unwrap_or(self.config.max_tokens),
        };

        let budget = Duration::from_secs(self.config.timeout_secs);
        match tokio::time::timeout(budget, self.send(&body)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(timeout_secs = self.config.timeout_secs, "completion call timed out");
                Err(CompletionError::new(CompletionErrorKind::TimedOut(
                    self.config.timeout_secs,
                )))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "openrouter"
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}
