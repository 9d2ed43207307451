//! Story and scene result types.

use serde::{Deserialize, Serialize};

/// One narrative beat of a story, paired with an illustrative image request.
///
/// Scenes are created once by the segment splitter or the fallback narrator
/// and never mutated afterwards. `part` is 1-based and contiguous within a
/// story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 1-based position of the scene in narrative order
    pub part: u32,
    /// Trimmed scene text (non-empty)
    pub text: String,
    /// Pre-built text-to-image request URL, if one was derived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Scene {
    /// Create a scene without an image request.
    pub fn new(part: u32, text: impl Into<String>) -> Self {
        Self {
            part,
            text: text.into(),
            image_url: None,
        }
    }

    /// Attach an image request URL.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// The complete result of one pipeline run.
///
/// Built once per request and returned to the caller regardless of which
/// path produced it; `is_fallback` is the only structural difference between
/// the generated and the offline result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Story title (the subject, or the paper title in fallback mode)
    pub title: String,
    /// The full narrative text the scenes were derived from
    pub full_text: String,
    /// Ordered scenes, `part` indexed 1..=N
    pub scenes: Vec<Scene>,
    /// Whether the deterministic fallback narrator produced this story
    pub is_fallback: bool,
}
