//! Completion service client for the Skald storyboard pipeline.
//!
//! Provides the [`Completion`] backend trait and [`OpenRouterClient`], the
//! chat-completions implementation used in production. The client performs
//! exactly one outbound call per request under a hard wall-clock timeout and
//! never retries; a failed attempt surfaces as a
//! [`CompletionError`](skald_error::CompletionError) for the pipeline to
//! degrade on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod client;
mod config;
mod wire;

pub use backend::Completion;
pub use client::OpenRouterClient;
pub use config::{
    CompletionConfig, DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS,
};
