//! Prompt construction for story generation.

use skald_core::{CompletionRequest, StoryRequest};

/// Fixed writer persona sent as the system message.
pub const STORY_SYSTEM_PROMPT: &str = "You are a science-literate fiction writer who blends \
     real space biology with imaginative storytelling. Always structure stories with clear \
     Part 1, Part 2, and Part 3 sections.";

/// The system/user prompt pair for one story request.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct PromptPair {
    /// Persona instruction
    system: String,
    /// Story instruction
    user: String,
}

impl PromptPair {
    /// The two-message conversation this pair represents.
    pub fn to_request(&self) -> CompletionRequest {
        CompletionRequest::from_prompts(&self.system, &self.user)
    }
}

/// Build the prompt pair for a story request. Pure function of its input.
///
/// A reference link takes precedence over a topic: the story is grounded in
/// the cited research and must name the real organism or mechanism the paper
/// implies. The link is passed through verbatim and never fetched.
pub fn build_story_prompts(request: &StoryRequest) -> PromptPair {
    let user = if let Some(reference) = request.reference() {
        format!(
            "Write a cinematic 3-part sci-fi story inspired by the research paper at this \
             link: {reference}. Focus on space biology, discovery, and emotional depth. \
             Structure it clearly with 'Part 1: Discovery', 'Part 2: Crisis', and \
             'Part 3: Solution' headings, and name the real organism or mechanism the \
             research implies."
        )
    } else {
        let topic = request.topic().as_deref().unwrap_or("space biology");
        format!(
            "Write a 3-part cinematic sci-fi story about: {topic}. Include a clear \
             structure (Part 1: Setup, Part 2: Conflict, Part 3: Resolution). Make it \
             immersive and emotionally engaging."
        )
    };

    PromptPair {
        system: STORY_SYSTEM_PROMPT.to_string(),
        user,
    }
}
