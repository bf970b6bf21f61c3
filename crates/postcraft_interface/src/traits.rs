//! Trait definitions for the pipeline's external collaborators.

use async_trait::async_trait;
use postcraft_core::{ImageGeneration, ImageOptions, ReferenceImage, TextGeneration};
use postcraft_error::PostcraftResult;

/// Single-shot text generation.
///
/// Failures are returned as-is to the pipeline caller; implementations own any
/// retry policy.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt under a system prompt.
    async fn generate_text(
        &self,
        prompt: &str,
        system_prompt: &str,
    ) -> PostcraftResult<TextGeneration>;
}

/// Single-shot image generation.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image. A response without image data is a failure for the caller.
    async fn generate_image(
        &self,
        prompt: &str,
        reference_images: &[ReferenceImage],
        options: &ImageOptions,
    ) -> PostcraftResult<ImageGeneration>;
}

/// Fetches prompt template files by path.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Fetch the template text stored at `path`.
    async fn fetch(&self, path: &str) -> PostcraftResult<String>;
}

/// Simple string key-value persistence with last-write-wins semantics.
///
/// Callers in this workspace log and swallow failures instead of propagating them.
pub trait KeyValueStore: Send + Sync {
    /// Read a value. `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> PostcraftResult<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> PostcraftResult<()>;
}

/// Source of randomness for keyword sampling.
///
/// Takes `&self` so one source can be shared behind an `Arc`.
pub trait RandomSource: Send + Sync {
    /// Uniform integer in `0..upper`. `upper` is always at least 1.
    fn below(&self, upper: usize) -> usize;
}
