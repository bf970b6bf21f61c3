//! Key-value storage error types.

/// Kinds of storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StorageErrorKind {
    /// Failed to create the storage directory
    #[display("Failed to create storage directory: {}", _0)]
    DirectoryCreation(String),
    /// Failed to read a stored value
    #[display("Failed to read value: {}", _0)]
    Read(String),
    /// Failed to write a value
    #[display("Failed to write value: {}", _0)]
    Write(String),
    /// Key cannot be mapped onto the backend
    #[display("Invalid key: {}", _0)]
    InvalidKey(String),
    /// Stored value could not be encoded or decoded
    #[display("Serialization failed: {}", _0)]
    Serialization(String),
    /// Backend lock was poisoned by a panicking writer
    #[display("Storage lock poisoned: {}", _0)]
    Poisoned(String),
}

/// Storage error with location tracking.
///
/// # Examples
///
/// ```
/// use postcraft_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::InvalidKey("../etc".to_string()));
/// assert!(format!("{}", err).contains("Invalid key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// The kind of error that occurred
    pub kind: StorageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StorageError {
    /// Create a new storage error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
