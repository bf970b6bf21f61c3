//! Post-wide visual style guide.

use serde::{Deserialize, Serialize};

/// Placeholder primary color when the guide omits one.
pub const DEFAULT_PRIMARY_COLOR: &str = "柔和的色调";
/// Placeholder secondary colors when the guide omits them.
pub const DEFAULT_SECONDARY_COLORS: [&str; 2] = ["浅灰色", "米白色"];
/// Placeholder typography style.
pub const DEFAULT_TYPOGRAPHY_STYLE: &str = "现代无衬线字体，清晰易读";
/// Placeholder layout style.
pub const DEFAULT_LAYOUT_STYLE: &str = "简洁布局，充足留白";
/// Placeholder decorative elements.
pub const DEFAULT_DECORATIVE_ELEMENTS: &str = "极简线条，几何图形";
/// Placeholder overall aesthetic.
pub const DEFAULT_OVERALL_AESTHETIC: &str = "清新、简约、专业";

/// Primary and secondary colors shared by every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Main color all content and summary pages reuse verbatim
    pub primary: String,
    /// Supporting colors
    pub secondary: Vec<String>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_COLOR.to_string(),
            secondary: DEFAULT_SECONDARY_COLORS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// The color, typography, layout, decoration and aesthetic every page follows.
///
/// `Default` yields the documented placeholder values used for missing fields.
///
/// # Examples
///
/// ```
/// use postcraft_core::{VisualGuide, DEFAULT_LAYOUT_STYLE};
///
/// let guide = VisualGuide::default();
/// assert_eq!(guide.layout_style, DEFAULT_LAYOUT_STYLE);
/// assert_eq!(guide.color_palette.secondary.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualGuide {
    /// Shared palette
    pub color_palette: ColorPalette,
    /// Typography style
    pub typography_style: String,
    /// Layout style
    pub layout_style: String,
    /// Decorative elements
    pub decorative_elements: String,
    /// Overall aesthetic
    pub overall_aesthetic: String,
}

impl Default for VisualGuide {
    fn default() -> Self {
        Self {
            color_palette: ColorPalette::default(),
            typography_style: DEFAULT_TYPOGRAPHY_STYLE.to_string(),
            layout_style: DEFAULT_LAYOUT_STYLE.to_string(),
            decorative_elements: DEFAULT_DECORATIVE_ELEMENTS.to_string(),
            overall_aesthetic: DEFAULT_OVERALL_AESTHETIC.to_string(),
        }
    }
}
