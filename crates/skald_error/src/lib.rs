//! Error types for the Skald storyboard pipeline.
//!
//! This crate provides the foundation error types used throughout the Skald
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use skald_error::{SkaldResult, ConfigError};
//!
//! fn load_key() -> SkaldResult<String> {
//!     Err(ConfigError::new("OPENROUTER_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod completion;
mod config;
mod error;
mod pipeline;

pub use builder::BuilderError;
pub use completion::{CompletionError, CompletionErrorKind};
pub use config::ConfigError;
pub use error::{SkaldError, SkaldErrorKind, SkaldResult};
pub use pipeline::{PipelineError, PipelineErrorKind};
