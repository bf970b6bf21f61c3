//! Layered configuration.
//!
//! Sources, later ones overriding earlier:
//! - Bundled defaults (include_str! from postcraft.toml)
//! - `~/.config/postcraft/postcraft.toml`
//! - `./postcraft.toml`

use config::{Config, File, FileFormat};
use postcraft_error::{ConfigError, PostcraftError, PostcraftResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

fn default_page_count() -> usize {
    8
}

fn default_min_content_pages() -> usize {
    5
}

fn default_outline_system_prompt() -> String {
    "你是一个专业的小红书内容创作助手，擅长生成吸引人的图文大纲。".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image".to_string()
}

fn default_aspect_ratio() -> String {
    "3:4".to_string()
}

fn default_resolution() -> String {
    "2048x2730".to_string()
}

fn default_temperature_styled() -> f32 {
    0.7
}

fn default_temperature_custom() -> f32 {
    0.9
}

fn default_temperature() -> f32 {
    1.0
}

fn default_temperature_head_image() -> f32 {
    0.6
}

fn default_max_count() -> usize {
    10
}

fn default_template_system_prompt() -> String {
    "你是一位精通AI绘画的专家级提示词工程师（Prompt Engineer），擅长根据模板要求生成高质量的图像生成提示词。"
        .to_string()
}

fn default_style_overrides_key() -> String {
    "style_custom_prompts".to_string()
}

fn default_favorites_key() -> String {
    "case_favorites".to_string()
}

/// Outline generation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineConfig {
    /// Page count requested when the caller supplies none
    #[serde(default = "default_page_count")]
    pub default_page_count: usize,
    /// Content pages guaranteed when no target count was supplied
    #[serde(default = "default_min_content_pages")]
    pub min_content_pages: usize,
    /// System prompt for the outline call
    #[serde(default = "default_outline_system_prompt")]
    pub system_prompt: String,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            default_page_count: default_page_count(),
            min_content_pages: default_min_content_pages(),
            system_prompt: default_outline_system_prompt(),
        }
    }
}

/// Image generation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Image model identifier
    #[serde(default = "default_image_model")]
    pub model: String,
    /// Aspect ratio literal written into prompts
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
    /// Resolution literal written into prompts
    #[serde(default = "default_resolution")]
    pub resolution: String,
    /// Temperature when a style is selected
    #[serde(default = "default_temperature_styled")]
    pub temperature_styled: f32,
    /// Temperature when a custom template drives the prompt
    #[serde(default = "default_temperature_custom")]
    pub temperature_custom: f32,
    /// Temperature otherwise
    #[serde(default = "default_temperature")]
    pub temperature_default: f32,
    /// Temperature in head-image mode
    #[serde(default = "default_temperature_head_image")]
    pub temperature_head_image: f32,
    /// Temperature for direct prompt-to-image calls
    #[serde(default = "default_temperature")]
    pub prompt_image_temperature: f32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            model: default_image_model(),
            aspect_ratio: default_aspect_ratio(),
            resolution: default_resolution(),
            temperature_styled: default_temperature_styled(),
            temperature_custom: default_temperature_custom(),
            temperature_default: default_temperature(),
            temperature_head_image: default_temperature_head_image(),
            prompt_image_temperature: default_temperature(),
        }
    }
}

/// Batch settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Upper bound on tasks per plan
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    /// System prompt for template-driven prompt generation
    #[serde(default = "default_template_system_prompt")]
    pub template_system_prompt: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            template_system_prompt: default_template_system_prompt(),
        }
    }
}

/// Key-value storage keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Key holding the style override map
    #[serde(default = "default_style_overrides_key")]
    pub style_overrides_key: String,
    /// Key holding the favorites list
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            style_overrides_key: default_style_overrides_key(),
            favorites_key: default_favorites_key(),
        }
    }
}

/// Top-level postcraft configuration.
///
/// # Example
///
/// ```no_run
/// use postcraft_core::PostcraftConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = PostcraftConfig::load()?;
/// println!("default pages: {}", config.outline.default_page_count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PostcraftConfig {
    /// Outline settings
    #[serde(default)]
    pub outline: OutlineConfig,
    /// Image settings
    #[serde(default)]
    pub image: ImageConfig,
    /// Batch settings
    #[serde(default)]
    pub batch: BatchConfig,
    /// Storage keys
    #[serde(default)]
    pub storage: StorageConfig,
}

impl PostcraftConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> PostcraftResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                PostcraftError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PostcraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> PostcraftResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../postcraft.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/postcraft/postcraft.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("postcraft").required(false));

        builder
            .build()
            .map_err(|e| {
                PostcraftError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                PostcraftError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}
