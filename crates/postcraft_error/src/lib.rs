//! Error types for the postcraft pipeline.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use postcraft_error::{PostcraftResult, GenerationError, GenerationErrorKind};
//!
//! fn render(prompt: &str) -> PostcraftResult<String> {
//!     if prompt.trim().is_empty() {
//!         Err(GenerationError::new(GenerationErrorKind::EmptyPrompt))?
//!     }
//!     Ok(prompt.to_string())
//! }
//!
//! assert!(render("   ").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod config;
mod error;
mod generation;
mod storage;
mod template;

pub use backend::BackendError;
pub use config::ConfigError;
pub use error::{PostcraftError, PostcraftErrorKind, PostcraftResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
