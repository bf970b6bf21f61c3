//! Generation error types.

/// Specific error conditions for generation requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// Prompt was empty or whitespace only
    #[display("Prompt must not be empty")]
    EmptyPrompt,
    /// Image model answered without image data
    #[display("No image generated")]
    NoImageData,
    /// Text model answered with blank text
    #[display("Generated text is empty: {}", _0)]
    EmptyResponse(String),
}

/// Error type for text and image generation.
///
/// # Examples
///
/// ```
/// use postcraft_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::EmptyPrompt);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
