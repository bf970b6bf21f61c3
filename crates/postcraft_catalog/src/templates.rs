//! Prompt template catalog.

use derive_getters::Getters;
use postcraft_error::{ConfigError, PostcraftResult};
use serde::Deserialize;

const BUNDLED_TEMPLATES: &str = include_str!("../data/templates.toml");

/// A meta-prompt template stored as a file reachable through a template source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct PromptTemplate {
    id: String,
    name: String,
    description: String,
    path: String,
    enabled: bool,
}

#[derive(Debug, Deserialize)]
struct TemplateFile {
    #[serde(default)]
    template: Vec<PromptTemplate>,
}

/// Known prompt templates. Disabled templates are invisible to lookups.
///
/// # Example
///
/// ```
/// use postcraft_catalog::PromptTemplateCatalog;
///
/// let catalog = PromptTemplateCatalog::bundled();
/// let poster = catalog.get("poster").unwrap();
/// assert_eq!(poster.path(), "prompt/picprompt.md");
/// assert!(catalog.get("missing").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PromptTemplateCatalog {
    templates: Vec<PromptTemplate>,
}

impl PromptTemplateCatalog {
    /// Templates compiled into this crate.
    pub fn bundled() -> Self {
        Self::from_toml(BUNDLED_TEMPLATES).unwrap_or_else(|e| {
            tracing::error!(error = %e, "Bundled templates failed to parse");
            Self {
                templates: Vec::new(),
            }
        })
    }

    /// Parse a document of `[[template]]` tables.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the document does not parse.
    pub fn from_toml(source: &str) -> PostcraftResult<Self> {
        let file: TemplateFile = toml::from_str(source)
            .map_err(|e| ConfigError::new(format!("Failed to parse prompt templates: {}", e)))?;
        Ok(Self {
            templates: file.template,
        })
    }

    /// Enabled template by id.
    pub fn get(&self, id: &str) -> Option<&PromptTemplate> {
        self.templates.iter().find(|t| t.id == id && t.enabled)
    }

    /// Enabled templates in catalog order.
    pub fn enabled(&self) -> impl Iterator<Item = &PromptTemplate> {
        self.templates.iter().filter(|t| t.enabled)
    }
}
