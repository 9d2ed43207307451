//! Story generation request.

use serde::{Deserialize, Serialize};

/// Input to the story pipeline: a free-form topic or a reference link to a
/// research paper. At least one of the two must be present; the pipeline
/// validates this before making any external call.
///
/// # Examples
///
/// ```
/// use skald_core::StoryRequest;
///
/// let request = StoryRequest::from_topic("bone density loss");
/// assert_eq!(request.subject(), Some("bone density loss"));
///
/// let request = StoryRequest::builder()
///     .reference("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC123/")
///     .build()
///     .unwrap();
/// assert!(request.topic().is_none());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(default, setter(into, strip_option))]
#[serde(default)]
pub struct StoryRequest {
    /// Free-form story topic (e.g. "bone density loss in microgravity")
    topic: Option<String>,
    /// Link to the research paper the story should be grounded in
    reference: Option<String>,
}

impl StoryRequest {
    /// Builder for assembling a request field by field.
    pub fn builder() -> StoryRequestBuilder {
        StoryRequestBuilder::default()
    }

    /// Request carrying only a topic.
    pub fn from_topic(topic: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            reference: None,
        }
    }

    /// Request carrying only a reference link.
    pub fn from_reference(reference: impl Into<String>) -> Self {
        Self {
            topic: None,
            reference: Some(reference.into()),
        }
    }

    /// The subject string used for titles and image prompts: the topic when
    /// present, otherwise the reference link.
    pub fn subject(&self) -> Option<&str> {
        self.topic.as_deref().or(self.reference.as_deref())
    }

    /// Whether the invariant `topic != None OR reference != None` holds.
    pub fn is_valid(&self) -> bool {
        self.topic.is_some() || self.reference.is_some()
    }
}
