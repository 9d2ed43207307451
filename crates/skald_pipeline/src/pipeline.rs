//! Pipeline orchestration.

use crate::{ImageConfig, ImageRequestBuilder, build_story_prompts, fallback_story, split_story};
use skald_client::Completion;
use skald_core::{PaperMeta, Scene, Story, StoryRequest};
use skald_error::PipelineError;
use tracing::{debug, instrument, warn};

/// Sequences one story generation run: validate, prompt, single completion
/// call, split, image derivation, with the offline fallback covering any
/// failure past validation.
///
/// A run moves through `Built -> Requested -> {Completed | Fallback}`. The
/// completion call is the only suspension point; its timeout (owned by the
/// backend) deterministically lands the run in the fallback state. No state
/// is re-entered and nothing is retried; a fresh call is a fresh run.
///
/// The only error this returns is `InvalidRequest`; every upstream failure
/// degrades into a fallback [`Story`] so the caller always receives a usable
/// narrative.
pub struct StoryPipeline<C: Completion> {
    backend: C,
    images: ImageRequestBuilder,
}

impl<C: Completion> StoryPipeline<C> {
    /// Pipeline with the default image service configuration.
    pub fn new(backend: C) -> Self {
        Self {
            backend,
            images: ImageRequestBuilder::default(),
        }
    }

    /// Pipeline with an explicit image service configuration.
    pub fn with_image_config(backend: C, config: ImageConfig) -> Self {
        Self {
            backend,
            images: ImageRequestBuilder::new(config),
        }
    }

    /// Generate a story for `request`, using `meta` only if the run falls
    /// back to the offline narrative.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` when neither a topic nor a reference is
    /// present; no external call is made in that case.
    #[instrument(skip_all, fields(provider = self.backend.provider_name()))]
    pub async fn generate(
        &self,
        request: &StoryRequest,
        meta: Option<&PaperMeta>,
    ) -> Result<Story, PipelineError> {
        if !request.is_valid() {
            return Err(PipelineError::invalid_request(
                "missing 'topic' or 'reference'",
            ));
        }

        let prompts = build_story_prompts(request);
        let raw = match self.backend.complete(&prompts.to_request()).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "completion failed, using fallback narrative");
                return Ok(self.fallback(request, meta));
            }
        };

        let parts = split_story(&raw);
        if parts.is_empty() {
            warn!("completion text had no usable segments, using fallback narrative");
            return Ok(self.fallback(request, meta));
        }

        // is_valid() above guarantees a subject
        let subject = request.subject().unwrap_or_default();
        let scenes: Vec<Scene> = parts
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let part = (i + 1) as u32;
                let image_url = self.images.scene_url(part, subject, &text);
                Scene::new(part, text).with_image_url(image_url)
            })
            .collect();

        debug!(scenes = scenes.len(), "story generated");
        Ok(Story {
            title: subject.to_string(),
            full_text: raw,
            scenes,
            is_fallback: false,
        })
    }

    fn fallback(&self, request: &StoryRequest, meta: Option<&PaperMeta>) -> Story {
        let default_meta = PaperMeta::default();
        fallback_story(request, meta.unwrap_or(&default_meta), &self.images)
    }
}
