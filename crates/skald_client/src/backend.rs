//! Backend trait for text completion.

use async_trait::async_trait;
use skald_core::CompletionRequest;
use skald_error::CompletionError;

/// A text-completion backend.
///
/// The pipeline is generic over this trait so tests can inject a
/// deterministic mock instead of the HTTP client.
#[async_trait]
pub trait Completion: Send + Sync {
    /// Perform one completion call and return the trimmed response text.
    ///
    /// Implementations must make at most one upstream attempt per call and
    /// map every failure mode (timeout, non-success status, transport
    /// failure, empty output) into a [`CompletionError`].
    async fn complete(&self, req: &CompletionRequest) -> Result<String, CompletionError>;

    /// Provider name (e.g. "openrouter").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g. "openai/gpt-3.5-turbo").
    fn model_name(&self) -> &str;
}
