//! Completion service error types.

/// Specific failure conditions for a completion call.
///
/// Every variant is recoverable from the story pipeline's point of view: the
/// orchestrator degrades to the offline fallback narrative instead of
/// surfacing these to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// The call exceeded the configured wall-clock budget and was cancelled
    #[display("completion request timed out after {}s", _0)]
    TimedOut(u64),
    /// The service answered with a non-success HTTP status
    #[display("completion service returned status {}: {}", status, message)]
    Status {
        /// HTTP status code from the upstream service
        status: u16,
        /// Error body returned by the upstream service
        message: String,
    },
    /// The request never produced a response (connect, TLS, or body error)
    #[display("completion request failed: {}", _0)]
    Transport(String),
    /// The service answered 2xx but the extracted text was empty
    #[display("completion service returned an empty response")]
    EmptyResponse,
}

/// Error type for completion service calls.
///
/// # Examples
///
/// ```
/// use skald_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::TimedOut(25));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The specific error condition
    pub kind: CompletionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Whether this failure was the wall-clock timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, CompletionErrorKind::TimedOut(_))
    }
}
