//! Aesthetic catalogs and the selector that picks parameters for one page.

use crate::random::sample;
use derive_getters::Getters;
use postcraft_core::PageType;
use postcraft_error::{ConfigError, PostcraftResult};
use postcraft_interface::RandomSource;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};
use tracing::debug;

const BUNDLED_AESTHETICS: &str = include_str!("../data/aesthetics.toml");

static BUNDLED: LazyLock<Arc<AestheticCatalog>> = LazyLock::new(|| {
    Arc::new(
        AestheticCatalog::from_toml(BUNDLED_AESTHETICS).expect("Valid bundled aesthetics.toml"),
    )
});

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct Palette {
    id: String,
    name: String,
    description: String,
    colors: Vec<String>,
    usage: String,
}

impl Palette {
    /// `name（description）`, the form written into image prompts.
    pub fn summary(&self) -> String {
        format!("{}（{}）", self.name, self.description)
    }
}

/// A named layout style.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct Layout {
    id: String,
    name: String,
    description: String,
    structure: String,
    usage: String,
}

impl Layout {
    /// `name（description）`, the form written into image prompts.
    pub fn summary(&self) -> String {
        format!("{}（{}）", self.name, self.description)
    }
}

/// A material, lighting or background entry with prompt keywords.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct KeywordEffect {
    id: String,
    name: String,
    description: String,
    keywords: Vec<String>,
    usage: String,
}

#[derive(Debug, Deserialize)]
struct PaletteRuleEntry {
    palette: String,
    keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AestheticFile {
    default_palette: String,
    default_layout: String,
    layout_by_page_type: HashMap<String, String>,
    palette_rule: Vec<PaletteRuleEntry>,
    palette: Vec<Palette>,
    layout: Vec<Layout>,
    material: Vec<KeywordEffect>,
    lighting: Vec<KeywordEffect>,
    background: Vec<KeywordEffect>,
}

/// Palette, layout, material, lighting and background catalogs.
///
/// Every palette and layout id referenced by a rule is resolved when the catalog
/// is built, so lookups cannot miss afterwards.
#[derive(Debug)]
pub struct AestheticCatalog {
    palettes: Vec<Palette>,
    layouts: Vec<Layout>,
    materials: Vec<KeywordEffect>,
    lighting: Vec<KeywordEffect>,
    backgrounds: Vec<KeywordEffect>,
    palette_rules: Vec<(usize, Vec<String>)>,
    default_palette: usize,
    layout_by_page_type: HashMap<PageType, usize>,
    default_layout: usize,
}

impl AestheticCatalog {
    /// The catalog compiled into this crate.
    pub fn bundled() -> Arc<AestheticCatalog> {
        Arc::clone(&BUNDLED)
    }

    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the document does not parse or a rule
    /// names a palette or layout that is not defined.
    pub fn from_toml(source: &str) -> PostcraftResult<Self> {
        let file: AestheticFile = toml::from_str(source)
            .map_err(|e| ConfigError::new(format!("Failed to parse aesthetics: {}", e)))?;

        let palette_index = |id: &str| -> PostcraftResult<usize> {
            file.palette
                .iter()
                .position(|p| p.id == id)
                .ok_or_else(|| ConfigError::new(format!("Unknown palette id: {}", id)).into())
        };
        let layout_index = |id: &str| -> PostcraftResult<usize> {
            file.layout
                .iter()
                .position(|l| l.id == id)
                .ok_or_else(|| ConfigError::new(format!("Unknown layout id: {}", id)).into())
        };

        let palette_rules = file
            .palette_rule
            .iter()
            .map(|rule| {
                let keywords = rule.keywords.iter().map(|k| k.to_lowercase()).collect();
                Ok((palette_index(&rule.palette)?, keywords))
            })
            .collect::<PostcraftResult<Vec<_>>>()?;
        let default_palette = palette_index(&file.default_palette)?;
        let default_layout = layout_index(&file.default_layout)?;
        let layout_by_page_type = file
            .layout_by_page_type
            .iter()
            .map(|(name, id)| {
                let page_type = PageType::from_keyword(name).ok_or_else(|| {
                    ConfigError::new(format!("Unknown page type in layout map: {}", name))
                })?;
                Ok((page_type, layout_index(id)?))
            })
            .collect::<PostcraftResult<HashMap<_, _>>>()?;

        Ok(Self {
            palette_rules,
            default_palette,
            default_layout,
            layout_by_page_type,
            palettes: file.palette,
            layouts: file.layout,
            materials: file.material,
            lighting: file.lighting,
            backgrounds: file.background,
        })
    }

    /// All palettes.
    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// All layouts.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// All material effects.
    pub fn materials(&self) -> &[KeywordEffect] {
        &self.materials
    }

    /// All lighting effects.
    pub fn lighting(&self) -> &[KeywordEffect] {
        &self.lighting
    }

    /// All background textures.
    pub fn backgrounds(&self) -> &[KeywordEffect] {
        &self.backgrounds
    }

    /// Palette by id.
    pub fn palette(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    /// Layout by id.
    pub fn layout(&self, id: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.id == id)
    }

    /// Background texture by id.
    pub fn background(&self, id: &str) -> Option<&KeywordEffect> {
        self.backgrounds.iter().find(|b| b.id == id)
    }

    /// First palette whose rule keywords appear in the lowercased content.
    pub fn recommended_palette(&self, content: &str) -> &Palette {
        let lowered = content.to_lowercase();
        let index = self
            .palette_rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k.as_str())))
            .map(|(index, _)| *index)
            .unwrap_or(self.default_palette);
        &self.palettes[index]
    }

    /// Layout assigned to a page type.
    pub fn recommended_layout(&self, page_type: PageType) -> &Layout {
        let index = self
            .layout_by_page_type
            .get(&page_type)
            .copied()
            .unwrap_or(self.default_layout);
        &self.layouts[index]
    }

    fn material_keywords(&self) -> Vec<String> {
        self.materials
            .iter()
            .flat_map(|m| m.keywords.iter().cloned())
            .collect()
    }

    fn lighting_keywords(&self) -> Vec<String> {
        self.lighting
            .iter()
            .flat_map(|l| l.keywords.iter().cloned())
            .collect()
    }
}

/// Parameters chosen for one page.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct AestheticSelection {
    palette: Palette,
    layout: Layout,
    materials: Vec<String>,
    lighting: Vec<String>,
}

/// Picks palette, layout, and sampled material and lighting keywords for a page.
///
/// # Example
///
/// ```
/// use postcraft_catalog::{AestheticSelector, SequenceRandom};
/// use postcraft_core::PageType;
/// use std::sync::Arc;
///
/// let selector = AestheticSelector::new(Arc::new(SequenceRandom::new(vec![0])));
/// let selection = selector.select("极简桌面收纳", PageType::Summary, 2);
///
/// assert_eq!(selection.palette().id(), "minimal_white");
/// assert_eq!(selection.layout().id(), "bento_grid");
/// assert_eq!(selection.materials().len(), 2);
/// ```
#[derive(Clone)]
pub struct AestheticSelector {
    catalog: Arc<AestheticCatalog>,
    random: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for AestheticSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AestheticSelector")
            .field("catalog", &self.catalog)
            .finish_non_exhaustive()
    }
}

impl AestheticSelector {
    /// Selector over the bundled catalog.
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self::with_catalog(AestheticCatalog::bundled(), random)
    }

    /// Selector over a specific catalog.
    pub fn with_catalog(catalog: Arc<AestheticCatalog>, random: Arc<dyn RandomSource>) -> Self {
        Self { catalog, random }
    }

    /// Underlying catalog.
    pub fn catalog(&self) -> &AestheticCatalog {
        &self.catalog
    }

    /// `count` distinct material keywords.
    pub fn material_keywords(&self, count: usize) -> Vec<String> {
        sample(&self.catalog.material_keywords(), count, self.random.as_ref())
    }

    /// `count` distinct lighting keywords.
    pub fn lighting_keywords(&self, count: usize) -> Vec<String> {
        sample(&self.catalog.lighting_keywords(), count, self.random.as_ref())
    }

    /// Full selection for one page. Materials are drawn before lighting.
    pub fn select(
        &self,
        content: &str,
        page_type: PageType,
        keyword_count: usize,
    ) -> AestheticSelection {
        let selection = AestheticSelection {
            palette: self.catalog.recommended_palette(content).clone(),
            layout: self.catalog.recommended_layout(page_type).clone(),
            materials: self.material_keywords(keyword_count),
            lighting: self.lighting_keywords(keyword_count),
        };
        debug!(
            palette = %selection.palette.id,
            layout = %selection.layout.id,
            materials = ?selection.materials,
            lighting = ?selection.lighting,
            "Selected aesthetic parameters"
        );
        selection
    }
}
