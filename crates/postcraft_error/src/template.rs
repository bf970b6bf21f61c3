//! Prompt template error types.

/// Specific error conditions for prompt templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Template id is unknown or disabled
    #[display("Template '{}' does not exist or is disabled", _0)]
    NotFound(String),
    /// Template file could not be fetched
    #[display("Template load failed for {}: {}", path, reason)]
    LoadFailed {
        /// Path the template was fetched from
        path: String,
        /// Reason reported by the template source
        reason: String,
    },
}

/// Error type for prompt template operations.
///
/// # Examples
///
/// ```
/// use postcraft_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::NotFound("poster".to_string()));
/// assert!(format!("{}", err).contains("poster"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
