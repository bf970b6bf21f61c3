//! Outline pipeline for multi-page social posts.
//!
//! Builds the outline instruction for a text model, recovers the visual
//! guide and pages from the model's free text, then enforces page count and
//! fills empty fields so the result is always structurally valid.
//!
//! # Example
//!
//! ```
//! use postcraft_core::PageType;
//! use postcraft_outline::{TopicContext, assemble_outline};
//!
//! let raw = "【全局视觉指南】\n主色调：奶油白\n<page>\n[封面]\n秋季穿搭\n配图建议：落叶街景\n<page>\n[内容]\n叠穿技巧";
//! let outline = assemble_outline(raw, &TopicContext::new("秋季穿搭"), Some(2), 5);
//!
//! assert_eq!(outline.pages[0].page_type, PageType::Cover);
//! assert_eq!(outline.visual_guide.unwrap().color_palette.primary, "奶油白");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod context;
mod fallback;
mod normalize;
mod parser;
mod pipeline;
mod request;

pub use context::TopicContext;
pub use fallback::ContentFallbackFiller;
pub use normalize::PageCountNormalizer;
pub use parser::{ParsedOutline, parse_outline, parse_visual_guide, parse_visual_metadata};
pub use pipeline::{OutlineGenerator, assemble_outline};
pub use request::{OutlineRequest, OutlineRequestBuilder, ResolvedStyle};
