//! Wire format for the chat-completions endpoint.

use serde::{Deserialize, Serialize};
use skald_core::Message;

/// Request body for the chat-completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// One message in the wire conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_wire_str(),
            content: message.content.clone(),
        }
    }
}

/// Response body from the chat-completions endpoint.
///
/// Only the fields the pipeline consumes are modeled; everything else in the
/// upstream payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// The first choice's trimmed message content, if it is non-empty.
    pub fn first_text(&self) -> Option<&str> {
        let text = self.choices.first()?.message.content.as_deref()?.trim();
        if text.is_empty() { None } else { Some(text) }
    }
}
