//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message in the two-message conversation sent to the
/// completion service.
///
/// # Examples
///
/// ```
/// use skald_core::Role;
///
/// assert_ne!(Role::System, Role::User);
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages fix the writer persona
    System,
    /// User messages carry the story instruction
    User,
    /// Assistant messages are from the model
    Assistant,
}

impl Role {
    /// Wire name used by chat-completion APIs ("system", "user", "assistant").
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}
