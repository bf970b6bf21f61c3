//! Outline result type.

use crate::{Page, VisualGuide};
use serde::{Deserialize, Serialize};

/// A parsed and normalized outline.
///
/// `outline` keeps the raw model text so image prompts can quote it as context.
///
/// # Examples
///
/// ```
/// use postcraft_core::{Outline, Page, PageType};
///
/// let outline = Outline {
///     outline: "[封面]\n标题".to_string(),
///     pages: vec![Page::new(0, PageType::Cover, "标题")],
///     visual_guide: None,
/// };
/// assert_eq!(outline.pages.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outline {
    /// Raw text returned by the text model
    pub outline: String,
    /// Ordered pages, cover first
    pub pages: Vec<Page>,
    /// Global visual guide, absent when the model emitted none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_guide: Option<VisualGuide>,
}
