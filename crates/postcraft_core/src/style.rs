//! Style preset configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A named aesthetic preset with a long-form descriptive prompt.
///
/// # Examples
///
/// ```
/// use postcraft_core::StylePromptConfig;
///
/// let mut style = StylePromptConfig::new("morandi", "莫兰迪", "低饱和", "灰调高级感");
/// assert_eq!(style.effective_prompt(), "灰调高级感");
///
/// style.set_custom_prompt(Some("我的版本".to_string()));
/// assert_eq!(style.effective_prompt(), "我的版本");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StylePromptConfig {
    /// Stable identifier
    id: String,
    /// Display name
    name: String,
    /// Short description
    description: String,
    /// Compiled-in prompt
    default_prompt: String,
    /// User override, takes priority when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_prompt: Option<String>,
}

impl StylePromptConfig {
    /// Create a preset with no custom override.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        default_prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            default_prompt: default_prompt.into(),
            custom_prompt: None,
        }
    }

    /// Replace the user override.
    pub fn set_custom_prompt(&mut self, custom_prompt: Option<String>) {
        self.custom_prompt = custom_prompt;
    }

    /// Custom prompt when set, default prompt otherwise.
    pub fn effective_prompt(&self) -> &str {
        self.custom_prompt
            .as_deref()
            .unwrap_or(self.default_prompt.as_str())
    }
}
