//! Narrative generation pipeline for the Skald storyboard service.
//!
//! The pipeline turns a topic or a reference link into a short multi-part
//! sci-fi story plus one illustrative image request per part:
//!
//! 1. [`build_story_prompts`] constructs the system/user prompt pair.
//! 2. A [`Completion`](skald_client::Completion) backend performs the single
//!    bounded-time call to the completion service.
//! 3. [`split_story`] parses the raw narrative into 1..=3 segments using a
//!    layered delimiter strategy.
//! 4. [`ImageRequestBuilder`] derives a deterministic text-to-image URL per
//!    segment.
//! 5. When any of that fails, [`fallback_story`] synthesizes a five-part
//!    narrative offline from paper metadata, so the caller always receives
//!    a usable [`Story`](skald_core::Story) rather than a bare upstream
//!    error.
//!
//! [`StoryPipeline`] sequences the steps. The [`Summarizer`] and
//! [`WhatIfAdvisor`] reuse the same backend for the paper-summary and
//! what-if question features.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive;
mod fallback;
mod image;
mod pipeline;
mod prompt;
mod split;
mod summarize;
mod whatif;

pub use archive::{DOMAIN_KEYWORDS, MAX_RELEVANT_PAPERS, PaperArchive};
pub use fallback::{FALLBACK_SCENE_TITLES, fallback_story};
pub use image::{EXCERPT_CHARS, ImageConfig, ImageRequestBuilder};
pub use pipeline::StoryPipeline;
pub use prompt::{PromptPair, STORY_SYSTEM_PROMPT, build_story_prompts};
pub use split::{MAX_SEGMENTS, MIN_PARAGRAPH_CHARS, split_story};
pub use summarize::{SUMMARY_SYSTEM_PROMPT, SummarizeRequest, Summarizer};
pub use whatif::{WHATIF_MAX_TOKENS, WHATIF_SYSTEM_PROMPT, WHATIF_TEMPERATURE, WhatIfAdvisor};
