//! Literal markers shared by the outline contract, its parser, and the image prompt.
//!
//! The request builder tells the text model to emit these exact strings and the
//! parser looks for the same ones, so both sides read them from here.
//! [`locate_image_suggestion`] is shared by the outline parser and the image
//! prompt assembler.

/// Header opening the global visual guide block.
pub const GUIDE_HEADER: &str = "【全局视觉指南】";
/// Header opening a per-page visual metadata block.
pub const METADATA_HEADER: &str = "【视觉元数据】";
/// Explicit page boundary.
pub const PAGE_DELIMITER: &str = "<page>";
/// Legacy page boundary.
pub const LEGACY_DELIMITER: &str = "---";

/// Label for the primary color field.
pub const PRIMARY_COLOR_LABEL: &str = "主色调";
/// Label for the secondary colors field.
pub const SECONDARY_COLOR_LABEL: &str = "辅助色";
/// Label for the typography field.
pub const TYPOGRAPHY_LABEL: &str = "字体风格";
/// Label for the layout field.
pub const LAYOUT_LABEL: &str = "布局风格";
/// Label for the decorative elements field.
pub const DECORATIVE_LABEL: &str = "装饰元素";
/// Label for the overall aesthetic field.
pub const AESTHETIC_LABEL: &str = "整体美学";

/// Per-page label for the visual focus field.
pub const VISUAL_FOCUS_LABEL: &str = "视觉重点";
/// Per-page label for the layout pattern field.
pub const LAYOUT_PATTERN_LABEL: &str = "布局模式";
/// Per-page label for the decorative style field.
pub const DECORATIVE_STYLE_LABEL: &str = "装饰风格";

/// Accepted phrasings of the image suggestion label. The first is canonical.
pub const IMAGE_SUGGESTION_LABELS: [&str; 3] = ["配图建议", "图片建议", "建议配图"];

/// An image suggestion found inside page text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSuggestionSpan {
    /// Suggestion text, trimmed
    pub text: String,
    /// Byte range from the label through the end of the suggestion
    pub span: std::ops::Range<usize>,
}

/// Locate the first labelled image suggestion in `text`.
///
/// A label must be followed by at least one colon or whitespace character. The
/// suggestion runs until the next blank line or the end of the text.
///
/// # Examples
///
/// ```
/// use postcraft_core::markers::locate_image_suggestion;
///
/// let text = "第一步：准备器具\n\n配图建议：整齐摆放的咖啡器具\n\n其他";
/// let found = locate_image_suggestion(text).unwrap();
/// assert_eq!(found.text, "整齐摆放的咖啡器具");
/// assert_eq!(&text[..found.span.start], "第一步：准备器具\n\n");
/// ```
pub fn locate_image_suggestion(text: &str) -> Option<ImageSuggestionSpan> {
    let mut candidates: Vec<(usize, &str)> = IMAGE_SUGGESTION_LABELS
        .iter()
        .flat_map(|label| text.match_indices(label))
        .collect();
    candidates.sort_by_key(|(position, _)| *position);

    candidates.into_iter().find_map(|(start, label)| {
        let after_label = start + label.len();
        let rest = &text[after_label..];
        let body = rest.trim_start_matches(|c: char| c == '：' || c == ':' || c.is_whitespace());
        if body.len() == rest.len() || body.is_empty() {
            return None;
        }
        let body_start = text.len() - body.len();
        let body_len = body.find("\n\n").unwrap_or(body.len());
        let suggestion = body[..body_len].trim();
        if suggestion.is_empty() {
            return None;
        }
        Some(ImageSuggestionSpan {
            text: suggestion.to_string(),
            span: start..body_start + body_len,
        })
    })
}
