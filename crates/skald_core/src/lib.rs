//! Core data types for the Skald storyboard pipeline.
//!
//! This crate provides the foundation data types used across the Skald
//! workspace: the request/result shapes of the narrative pipeline, the
//! conversation primitives sent to the completion service, and the paper
//! metadata that feeds the offline fallback narrative.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod generate;
mod message;
mod paper;
mod request;
mod role;
mod story;
mod telemetry;

pub use generate::CompletionRequest;
pub use message::Message;
pub use paper::{PaperMeta, PaperMetaBuilder};
pub use request::{StoryRequest, StoryRequestBuilder};
pub use role::Role;
pub use story::{Scene, Story};
pub use telemetry::init_telemetry;
