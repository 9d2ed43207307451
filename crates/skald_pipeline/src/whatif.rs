//! What-if question answering over the paper archive.

use crate::PaperArchive;
use skald_client::Completion;
use skald_core::CompletionRequest;
use skald_error::PipelineError;
use tracing::{debug, instrument};

/// Fixed expert persona sent as the system message.
pub const WHATIF_SYSTEM_PROMPT: &str =
    "You are a space biology expert. Cite papers when available.";

/// Sampling temperature for what-if answers (lower than story generation:
/// these should be reasoned, not imaginative).
pub const WHATIF_TEMPERATURE: f32 = 0.7;

/// Output token bound for what-if answers.
pub const WHATIF_MAX_TOKENS: u32 = 500;

/// Answers speculative space-biology questions, grounding each answer in up
/// to three matching rows from a static [`PaperArchive`].
pub struct WhatIfAdvisor<C: Completion> {
    backend: C,
    archive: PaperArchive,
}

impl<C: Completion> WhatIfAdvisor<C> {
    /// Advisor over the given backend and archive.
    pub fn new(backend: C, archive: PaperArchive) -> Self {
        Self { backend, archive }
    }

    /// Answer a question with one completion call.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` for an empty question, and propagates
    /// completion failures.
    #[instrument(skip_all, fields(provider = self.backend.provider_name()))]
    pub async fn answer(&self, question: &str) -> Result<String, PipelineError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(PipelineError::invalid_request("no question provided"));
        }

        let context = self.archive.context_block(question);
        debug!(has_context = !context.contains("No matching papers"), "answering what-if question");

        let prompt = format!(
            "You are a space biology expert with access to NASA research papers.\n\
             {context}\n\n\
             Question: \"{question}\"\n\n\
             Instructions:\n\
             1. Provide a scientifically reasoned answer (150-200 words)\n\
             2. If papers were provided, cite at least one by title or PMC_ID\n\
             3. Format as:\n\n\
             **Answer:** [explanation]\n\n\
             **References:** [paper titles/IDs or \"Based on general space biology principles\"]"
        );

        let mut completion = CompletionRequest::from_prompts(WHATIF_SYSTEM_PROMPT, prompt);
        completion.temperature = Some(WHATIF_TEMPERATURE);
        completion.max_tokens = Some(WHATIF_MAX_TOKENS);
        Ok(self.backend.complete(&completion).await?)
    }
}
