//! Image request construction for story scenes.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Number of leading characters of a segment used in the image prompt.
pub const EXCERPT_CHARS: usize = 150;

/// RFC 3986 unreserved characters stay literal; everything else is encoded.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Configuration for the text-to-image service URL template.
///
/// Width, height, and model are constant query parameters on every URL
/// built from this config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    /// Image service prompt endpoint
    pub base_url: String,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Image model identifier
    pub model: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            base_url: "https://image.pollinations.ai/prompt".to_string(),
            width: 1024,
            height: 768,
            model: "flux".to_string(),
        }
    }
}

/// Builds one image-generation URL per scene, deterministically from scene
/// content. Pure string transform: this step cannot fail, and identical
/// input always produces a byte-identical URL.
#[derive(Debug, Clone, Default)]
pub struct ImageRequestBuilder {
    config: ImageConfig,
}

impl ImageRequestBuilder {
    /// Builder with an explicit service configuration.
    pub fn new(config: ImageConfig) -> Self {
        Self { config }
    }

    /// Derive the image request URL for one scene.
    ///
    /// The prompt is the fixed scene template carrying the 1-based part
    /// index and the story subject, followed by the sanitized leading
    /// excerpt of the scene text.
    pub fn scene_url(&self, part: u32, subject: &str, text: &str) -> String {
        let excerpt = sanitize_excerpt(text);
        let prompt = format!("cinematic sci-fi scene {part}, {subject}: {excerpt}");
        let encoded = utf8_percent_encode(&prompt, URL_COMPONENT);
        format!(
            "{}/{}?width={}&height={}&model={}",
            self.config.base_url, encoded, self.config.width, self.config.height, self.config.model
        )
    }
}

/// First [`EXCERPT_CHARS`] characters with everything outside
/// alphanumerics/whitespace replaced by a space.
fn sanitize_excerpt(text: &str) -> String {
    text.chars()
        .take(EXCERPT_CHARS)
        .map(|c| if c.is_alphanumeric() || c.is_whitespace() { c } else { ' ' })
        .collect()
}
