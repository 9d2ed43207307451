//! Paper summarization.

use skald_client::Completion;
use skald_core::CompletionRequest;
use skald_error::PipelineError;
use tracing::{debug, instrument};

/// Fixed summarizer persona sent as the system message.
pub const SUMMARY_SYSTEM_PROMPT: &str =
    "You are a helpful scientific summarizer for space biology papers.";

/// Input to the summarizer: either raw text to summarize directly, or a
/// paper title (with optional link) to summarize from citation alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummarizeRequest {
    /// Raw text to summarize, used (trimmed) as the prompt when present
    pub text: Option<String>,
    /// Paper title
    pub title: Option<String>,
    /// Paper link, included alongside the title
    pub link: Option<String>,
}

impl SummarizeRequest {
    /// Summarize raw text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Summarize a paper by title and link.
    pub fn from_paper(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: None,
            title: Some(title.into()),
            link: Some(link.into()),
        }
    }
}

/// Summarizes papers with a single completion call per request.
///
/// Unlike the story pipeline there is no offline fallback here: an upstream
/// failure surfaces as an error.
pub struct Summarizer<C: Completion> {
    backend: C,
}

impl<C: Completion> Summarizer<C> {
    /// Summarizer over the given backend.
    pub fn new(backend: C) -> Self {
        Self { backend }
    }

    /// Produce a summary for the request.
    ///
    /// Blank or whitespace-only fields count as absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` when neither text nor title is present, and
    /// propagates completion failures.
    #[instrument(skip_all, fields(provider = self.backend.provider_name()))]
    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<String, PipelineError> {
        let text = request.text.as_deref().map(str::trim).filter(|t| !t.is_empty());
        let title = request.title.as_deref().map(str::trim).filter(|t| !t.is_empty());
        let prompt = match (text, title) {
            (Some(text), _) => text.to_string(),
            (None, Some(title)) => {
                let link = request.link.as_deref().unwrap_or("(not provided)");
                format!("Summarize this space biology paper titled \"{title}\". Paper link: {link}")
            }
            (None, None) => {
                return Err(PipelineError::invalid_request("no text or title provided"));
            }
        };

        debug!(prompt_chars = prompt.len(), "summarizing");
        let completion = CompletionRequest::from_prompts(SUMMARY_SYSTEM_PROMPT, prompt);
        Ok(self.backend.complete(&completion).await?)
    }
}
