//! Page types for a multi-page post outline.

use serde::{Deserialize, Serialize};

/// The role a page plays in the post.
///
/// # Examples
///
/// ```
/// use postcraft_core::PageType;
///
/// assert_eq!(PageType::from_tag("封面"), Some(PageType::Cover));
/// assert_eq!(PageType::Summary.tag(), "总结");
/// assert_eq!(format!("{}", PageType::Content), "content");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// Title page, always first
    #[display("cover")]
    Cover,
    /// Body page
    #[default]
    #[display("content")]
    Content,
    /// Closing recap page
    #[display("summary")]
    Summary,
}

impl PageType {
    /// Bracket tag text the text model writes at the top of a page (`[封面]`).
    pub fn tag(&self) -> &'static str {
        match self {
            PageType::Cover => "封面",
            PageType::Content => "内容",
            PageType::Summary => "总结",
        }
    }

    /// Human label used inside image prompts.
    pub fn label(&self) -> &'static str {
        match self {
            PageType::Cover => "封面页",
            PageType::Content => "内容页",
            PageType::Summary => "总结页",
        }
    }

    /// Resolve a bracket tag. Returns `None` for anything unrecognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "封面" => Some(PageType::Cover),
            "内容" => Some(PageType::Content),
            "总结" => Some(PageType::Summary),
            _ => None,
        }
    }

    /// Resolve an English keyword (`cover`, `content`, `summary`), case-insensitively.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word.trim().to_lowercase().as_str() {
            "cover" => Some(PageType::Cover),
            "content" => Some(PageType::Content),
            "summary" => Some(PageType::Summary),
            _ => None,
        }
    }

    /// Whether this is the cover type.
    pub fn is_cover(&self) -> bool {
        matches!(self, PageType::Cover)
    }
}

/// Per-page visual specialization layered on top of the global guide.
///
/// Every field is optional: the text model may omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualMetadata {
    /// Dominant color for this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Supporting colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_colors: Option<Vec<String>>,
    /// What the eye should land on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_focus: Option<String>,
    /// Layout pattern for this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_pattern: Option<String>,
    /// Decorative treatment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decorative_style: Option<String>,
}

impl VisualMetadata {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.primary_color.is_none()
            && self.secondary_colors.is_none()
            && self.visual_focus.is_none()
            && self.layout_pattern.is_none()
            && self.decorative_style.is_none()
    }
}

/// One unit of an outline: one eventual image plus its caption text.
///
/// # Examples
///
/// ```
/// use postcraft_core::{Page, PageType};
///
/// let page = Page::new(0, PageType::Cover, "秋季穿搭指南");
/// assert!(page.page_type.is_cover());
/// assert!(page.image_prompt.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Position in the final sequence
    pub index: usize,
    /// Page role
    #[serde(rename = "type")]
    pub page_type: PageType,
    /// Freeform caption text, possibly multi-line
    pub content: String,
    /// Image suggestion for this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
    /// Optional per-page visual metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_metadata: Option<VisualMetadata>,
}

impl Page {
    /// Create a page with no image suggestion and no metadata.
    pub fn new(index: usize, page_type: PageType, content: impl Into<String>) -> Self {
        Self {
            index,
            page_type,
            content: content.into(),
            image_prompt: None,
            visual_metadata: None,
        }
    }

    /// Attach an image suggestion.
    pub fn with_image_prompt(mut self, image_prompt: impl Into<String>) -> Self {
        self.image_prompt = Some(image_prompt.into());
        self
    }

    /// Attach visual metadata.
    pub fn with_visual_metadata(mut self, metadata: VisualMetadata) -> Self {
        self.visual_metadata = Some(metadata);
        self
    }
}

/// Reassign `index` sequentially from zero.
pub fn reindex(pages: &mut [Page]) {
    for (index, page) in pages.iter_mut().enumerate() {
        page.index = index;
    }
}
