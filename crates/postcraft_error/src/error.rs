//! Top-level error wrapper types.

use crate::{BackendError, ConfigError, GenerationError, StorageError, TemplateError};

/// Every failure family the pipeline can surface.
///
/// Malformed model output has no variant here: the outline parser degrades
/// instead of failing.
///
/// # Examples
///
/// ```
/// use postcraft_error::{PostcraftError, BackendError};
///
/// let err: PostcraftError = BackendError::new("Connection failed").into();
/// assert!(format!("{}", err).contains("Backend Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum PostcraftErrorKind {
    /// External collaborator error
    #[from(BackendError)]
    Backend(BackendError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Key-value storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Text or image generation error
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Prompt template error
    #[from(TemplateError)]
    Template(TemplateError),
}

/// Postcraft error with kind discrimination.
///
/// # Examples
///
/// ```
/// use postcraft_error::{ConfigError, PostcraftResult};
///
/// fn might_fail() -> PostcraftResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Postcraft Error: {}", _0)]
pub struct PostcraftError(Box<PostcraftErrorKind>);

impl PostcraftError {
    /// Create a new error from a kind.
    pub fn new(kind: PostcraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostcraftErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to PostcraftErrorKind
impl<T> From<T> for PostcraftError
where
    T: Into<PostcraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for postcraft operations.
pub type PostcraftResult<T> = std::result::Result<T, PostcraftError>;
