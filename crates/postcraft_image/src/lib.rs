//! Image prompt assembly for outline pages.
//!
//! [`ImagePromptAssembler`] layers the compliance notice, global visual guide,
//! per-page constraint, style block, image suggestion, technical spec, page
//! content, design guidance and context into one prompt, then appends the
//! negative terms. [`PageImageGenerator`] sends the result to an injected
//! [`ImageGenerator`](postcraft_interface::ImageGenerator).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assembler;
mod generator;
mod negative;
mod sections;

pub use assembler::{AssembledPrompt, GENERIC_STYLE_PROMPT, ImagePromptAssembler, PageImageRequest};
pub use generator::{GeneratedImage, PageImageGenerator};
pub use negative::{
    BASE_NEGATIVE_TERMS, HEAD_IMAGE_NEGATIVE_TERMS, negative_prompt, style_negative_terms,
};
