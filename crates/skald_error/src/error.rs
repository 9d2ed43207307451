//! Top-level error wrapper types.

use crate::{BuilderError, CompletionError, ConfigError, PipelineError};

/// The foundation error enum aggregating every Skald error domain.
///
/// # Examples
///
/// ```
/// use skald_error::{SkaldError, ConfigError};
///
/// let config_err = ConfigError::new("missing base URL");
/// let err: SkaldError = config_err.into();
/// assert!(format!("{}", err).contains("Config Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SkaldErrorKind {
    /// Completion service error
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Skald error with kind discrimination.
///
/// # Examples
///
/// ```
/// use skald_error::{SkaldResult, ConfigError};
///
/// fn might_fail() -> SkaldResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Skald Error: {}", _0)]
pub struct SkaldError(Box<SkaldErrorKind>);

impl SkaldError {
    /// Create a new error from a kind.
    pub fn new(kind: SkaldErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SkaldErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SkaldErrorKind
impl<T> From<T> for SkaldError
where
    T: Into<SkaldErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Skald operations.
pub type SkaldResult<T> = std::result::Result<T, SkaldError>;
