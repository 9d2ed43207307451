//! Pipeline error types.

use crate::CompletionError;

/// Specific error conditions for pipeline operations.
#[derive(Debug, Clone, derive_more::Display)]
pub enum PipelineErrorKind {
    /// Neither a topic nor a reference was supplied
    #[display("invalid request: {}", _0)]
    InvalidRequest(String),
    /// A completion call failed in a context with no fallback path
    /// (summarizer, what-if advisor)
    #[display("{}", _0)]
    Completion(CompletionError),
}

/// Error type for pipeline operations.
///
/// `InvalidRequest` is the only failure the story pipeline itself surfaces;
/// every completion failure there degrades into a fallback `Story` instead.
///
/// # Examples
///
/// ```
/// use skald_error::{PipelineError, PipelineErrorKind};
///
/// let err = PipelineError::new(PipelineErrorKind::InvalidRequest(
///     "missing 'topic' or 'reference'".to_string(),
/// ));
/// assert!(format!("{}", err).contains("invalid request"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an `InvalidRequest` error.
    #[track_caller]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(PipelineErrorKind::InvalidRequest(message.into()))
    }

    /// Whether this is a caller error (as opposed to an upstream failure).
    pub fn is_invalid_request(&self) -> bool {
        matches!(self.kind, PipelineErrorKind::InvalidRequest(_))
    }
}

impl From<CompletionError> for PipelineError {
    #[track_caller]
    fn from(err: CompletionError) -> Self {
        Self::new(PipelineErrorKind::Completion(err))
    }
}
