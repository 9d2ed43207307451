//! Generation request for the completion service.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A single generation request for the completion service.
///
/// Parameter fields left as `None` fall back to the client's configured
/// defaults, so the pipeline only overrides what a given call needs.
///
/// # Examples
///
/// ```
/// use skald_core::{CompletionRequest, Message, Role};
///
/// let request = CompletionRequest {
///     messages: vec![
///         Message::new(Role::System, "You are a storyteller."),
///         Message::new(Role::User, "Tell me about tardigrades."),
///     ],
///     temperature: None,
///     max_tokens: Some(500),
/// };
/// assert_eq!(request.messages.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Sampling temperature override (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Maximum output token override
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Request built from the usual system + user prompt pair.
    pub fn from_prompts(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            messages: vec![
                Message::new(crate::Role::System, system),
                Message::new(crate::Role::User, user),
            ],
            temperature: None,
            max_tokens: None,
        }
    }
}
