//! Static catalogs for postcraft.
//!
//! - [`StylePresetCatalog`]: style presets with user overrides through a key-value store
//! - [`AestheticSelector`]: palette, layout, material and lighting picks for a page
//! - [`PromptTemplateCatalog`]: meta-prompt templates for batch prompt generation
//!
//! All catalogs ship as TOML under `data/` and are compiled in.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aesthetics;
mod random;
mod styles;
mod templates;

pub use aesthetics::{
    AestheticCatalog, AestheticSelection, AestheticSelector, KeywordEffect, Layout, Palette,
};
pub use random::{SeededRandom, SequenceRandom, ThreadRandom, sample};
pub use styles::{DEFAULT_OVERRIDES_KEY, StylePresetCatalog};
pub use templates::{PromptTemplate, PromptTemplateCatalog};
