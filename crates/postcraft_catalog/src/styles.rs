//! Style preset catalog with user overrides.

use postcraft_core::StylePromptConfig;
use postcraft_error::{ConfigError, PostcraftResult};
use postcraft_interface::KeyValueStore;
use postcraft_storage::InMemoryStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};
use tracing::{debug, instrument, warn};

const BUNDLED_STYLES: &str = include_str!("../data/styles.toml");

/// Default key under which overrides are stored.
pub const DEFAULT_OVERRIDES_KEY: &str = "style_custom_prompts";

#[derive(Debug, Clone, Deserialize)]
struct StyleFile {
    style: Vec<StyleEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct StyleEntry {
    id: String,
    name: String,
    description: String,
    prompt: String,
}

static BUNDLED: LazyLock<Vec<StyleEntry>> =
    LazyLock::new(|| parse_styles(BUNDLED_STYLES).expect("Valid bundled styles.toml"));

fn parse_styles(source: &str) -> PostcraftResult<Vec<StyleEntry>> {
    let file: StyleFile = toml::from_str(source)
        .map_err(|e| ConfigError::new(format!("Failed to parse style presets: {}", e)))?;
    Ok(file.style)
}

/// Stored override for one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct StoredOverride {
    #[serde(rename = "customPrompt")]
    custom_prompt: String,
}

/// Style presets plus user overrides read through a key-value store.
///
/// Overrides live as one JSON map `{ "<id>": { "customPrompt": "..." } }` under a
/// single key. Read failures are logged and treated as "no overrides". Writes
/// are skipped when the current overrides cannot be read.
///
/// # Example
///
/// ```
/// use postcraft_catalog::StylePresetCatalog;
///
/// let catalog = StylePresetCatalog::bundled();
/// assert!(!catalog.style_prompt("ins_minimal").is_empty());
/// assert_eq!(catalog.style_prompt("no_such_style"), "");
///
/// catalog.save_custom_prompt("ins_minimal", "  只用黑白灰  ");
/// assert_eq!(catalog.style_prompt("ins_minimal"), "只用黑白灰");
///
/// catalog.reset_custom_prompt("ins_minimal");
/// assert_ne!(catalog.style_prompt("ins_minimal"), "只用黑白灰");
/// ```
pub struct StylePresetCatalog {
    presets: Vec<StyleEntry>,
    store: Arc<dyn KeyValueStore>,
    overrides_key: String,
}

impl std::fmt::Debug for StylePresetCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StylePresetCatalog")
            .field("presets", &self.presets.len())
            .field("overrides_key", &self.overrides_key)
            .finish()
    }
}

impl StylePresetCatalog {
    /// Bundled presets with overrides kept in memory.
    pub fn bundled() -> Self {
        Self {
            presets: BUNDLED.clone(),
            store: Arc::new(InMemoryStore::new()),
            overrides_key: DEFAULT_OVERRIDES_KEY.to_string(),
        }
    }

    /// Presets parsed from a TOML document of `[[style]]` tables.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the document does not parse.
    pub fn from_toml(source: &str) -> PostcraftResult<Self> {
        Ok(Self {
            presets: parse_styles(source)?,
            store: Arc::new(InMemoryStore::new()),
            overrides_key: DEFAULT_OVERRIDES_KEY.to_string(),
        })
    }

    /// Read and write overrides through `store` under `key`.
    pub fn with_store(mut self, store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        self.store = store;
        self.overrides_key = key.into();
        self
    }

    /// Every preset with its current override, in catalog order.
    pub fn all_configs(&self) -> Vec<StylePromptConfig> {
        let overrides = self.load_overrides();
        self.presets
            .iter()
            .map(|entry| to_config(entry, &overrides))
            .collect()
    }

    /// One preset with its current override. `None` for unknown ids.
    pub fn config(&self, style_id: &str) -> Option<StylePromptConfig> {
        let entry = self.entry(style_id)?;
        Some(to_config(entry, &self.load_overrides()))
    }

    /// Display name of a preset.
    pub fn name(&self, style_id: &str) -> Option<&str> {
        self.entry(style_id).map(|entry| entry.name.as_str())
    }

    /// Effective prompt text: override, else default, else empty for unknown ids.
    #[instrument(skip(self))]
    pub fn style_prompt(&self, style_id: &str) -> String {
        match self.config(style_id) {
            Some(config) => config.effective_prompt().to_string(),
            None => {
                debug!("Unknown style id");
                String::new()
            }
        }
    }

    /// Store a trimmed override. A blank prompt clears the override.
    #[instrument(skip(self, custom_prompt), fields(prompt_len = custom_prompt.len()))]
    pub fn save_custom_prompt(&self, style_id: &str, custom_prompt: &str) {
        let mut overrides = match self.try_load_overrides() {
            Ok(overrides) => overrides,
            Err(e) => {
                warn!(error = %e, "Failed to load style overrides, not saving");
                return;
            }
        };
        let trimmed = custom_prompt.trim();
        if trimmed.is_empty() {
            overrides.remove(style_id);
        } else {
            overrides.insert(
                style_id.to_string(),
                StoredOverride {
                    custom_prompt: trimmed.to_string(),
                },
            );
        }
        self.store_overrides(&overrides);
    }

    /// Drop the override so the default prompt applies again.
    #[instrument(skip(self))]
    pub fn reset_custom_prompt(&self, style_id: &str) {
        let mut overrides = match self.try_load_overrides() {
            Ok(overrides) => overrides,
            Err(e) => {
                warn!(error = %e, "Failed to load style overrides, not resetting");
                return;
            }
        };
        if overrides.remove(style_id).is_some() {
            self.store_overrides(&overrides);
        }
    }

    fn entry(&self, style_id: &str) -> Option<&StyleEntry> {
        self.presets.iter().find(|entry| entry.id == style_id)
    }

    fn load_overrides(&self) -> BTreeMap<String, StoredOverride> {
        self.try_load_overrides().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to load style overrides");
            BTreeMap::new()
        })
    }

    /// Overrides for a read-modify-write. Store failures are returned so a
    /// degraded snapshot is never written back.
    fn try_load_overrides(&self) -> PostcraftResult<BTreeMap<String, StoredOverride>> {
        let Some(raw) = self.store.get(&self.overrides_key)? else {
            return Ok(BTreeMap::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!(error = %e, "Stored style overrides are not valid JSON, ignoring");
            BTreeMap::new()
        }))
    }

    fn store_overrides(&self, overrides: &BTreeMap<String, StoredOverride>) {
        let encoded = match serde_json::to_string(overrides) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(error = %e, "Failed to encode style overrides");
                return;
            }
        };
        match self.store.set(&self.overrides_key, &encoded) {
            Ok(()) => debug!(count = overrides.len(), "Saved style overrides"),
            Err(e) => warn!(error = %e, "Failed to save style overrides"),
        }
    }
}

fn to_config(
    entry: &StyleEntry,
    overrides: &BTreeMap<String, StoredOverride>,
) -> StylePromptConfig {
    let mut config = StylePromptConfig::new(
        entry.id.as_str(),
        entry.name.as_str(),
        entry.description.as_str(),
        entry.prompt.as_str(),
    );
    let custom = overrides
        .get(&entry.id)
        .map(|o| o.custom_prompt.clone())
        .filter(|prompt| !prompt.is_empty());
    config.set_custom_prompt(custom);
    config
}
