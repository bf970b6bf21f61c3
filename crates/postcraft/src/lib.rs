//! Postcraft - illustrated multi-page post generation
//!
//! Postcraft turns a topic into a paginated outline with a shared visual
//! guide, then assembles one image-generation prompt per page so every image
//! in the set looks like it belongs to the same post.
//!
//! # Features
//!
//! - **Outline pipeline**: instruction building, tolerant parsing of model
//!   output, page-count normalization and fallback filling
//! - **Image prompts**: section-ordered prompt assembly with style presets,
//!   aesthetic parameters, negative prompts and a temperature policy
//! - **Batch prompts**: bounded work lists and template-driven prompt expansion
//! - **Catalogs**: bundled style presets with persisted overrides, aesthetic
//!   catalogs and prompt templates
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use postcraft::{OutlineGenerator, PostcraftConfig, StylePresetCatalog};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     postcraft::init_tracing()?;
//!     let config = PostcraftConfig::load()?;
//!     let styles = Arc::new(StylePresetCatalog::bundled());
//!     let generator = OutlineGenerator::with_config(my_text_model(), styles, config.outline);
//!
//!     let outline = generator.generate_outline("秋季穿搭", Some(6), Some("ins_minimal")).await?;
//!     println!("{} pages", outline.pages.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `postcraft_error` - Error types
//! - `postcraft_core` - Data model, configuration, tracing setup
//! - `postcraft_interface` - Collaborator traits (text model, image model, storage)
//! - `postcraft_storage` - Key-value stores, favorites, template files
//! - `postcraft_catalog` - Style, aesthetic and prompt template catalogs
//! - `postcraft_outline` - Outline pipeline
//! - `postcraft_image` - Image prompt assembly and generation
//! - `postcraft_batch` - Batch planning and template prompts
//!
//! This crate (`postcraft`) re-exports everything for convenience.

#![forbid(unsafe_code)]

pub use postcraft_core::*;
pub use postcraft_error::*;
pub use postcraft_interface::*;

pub use postcraft_storage::{DirectoryTemplateSource, Favorites, FileStore, InMemoryStore};

pub use postcraft_catalog::{
    AestheticCatalog, AestheticSelection, AestheticSelector, DEFAULT_OVERRIDES_KEY, KeywordEffect,
    Layout, Palette, PromptTemplate, PromptTemplateCatalog, SeededRandom, SequenceRandom,
    StylePresetCatalog, ThreadRandom,
};

pub use postcraft_outline::{
    ContentFallbackFiller, OutlineGenerator, OutlineRequest, OutlineRequestBuilder,
    PageCountNormalizer, ParsedOutline, ResolvedStyle, TopicContext, assemble_outline,
    parse_outline, parse_visual_guide, parse_visual_metadata,
};

pub use postcraft_image::{
    AssembledPrompt, GENERIC_STYLE_PROMPT, GeneratedImage, ImagePromptAssembler,
    PageImageGenerator, PageImageRequest, negative_prompt,
};

pub use postcraft_batch::{
    TemplatePrompt, TemplatePromptGenerator, plan_prompt_batch, plan_prompt_batch_with_config,
};
