//! Core data types for the postcraft pipeline.
//!
//! This crate holds the page model shared by the outline, image and batch crates,
//! the literal markers of the outline text contract, and layered configuration.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod batch;
mod config;
mod generation;
pub mod markers;
mod outline;
mod page;
mod style;
mod telemetry;
mod visual_guide;

pub use batch::{PromptBatchPlan, PromptBatchTask};
pub use config::{BatchConfig, ImageConfig, OutlineConfig, PostcraftConfig, StorageConfig};
pub use generation::{
    ImageGeneration, ImageOptions, ReferenceImage, ResponseFormat, TextGeneration, TokenUsage,
};
pub use outline::Outline;
pub use page::{Page, PageType, VisualMetadata, reindex};
pub use style::StylePromptConfig;
pub use telemetry::init_tracing;
pub use visual_guide::{
    ColorPalette, DEFAULT_DECORATIVE_ELEMENTS, DEFAULT_LAYOUT_STYLE, DEFAULT_OVERALL_AESTHETIC,
    DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLORS, DEFAULT_TYPOGRAPHY_STYLE, VisualGuide,
};
