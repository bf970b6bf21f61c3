//! Recovery of guide and pages from the outline model's free text.
//!
//! Parsing is total. Every extraction is an optional match that degrades to a
//! default or to absence, so malformed model output never produces an error.

use postcraft_core::markers::{
    AESTHETIC_LABEL, DECORATIVE_LABEL, DECORATIVE_STYLE_LABEL, GUIDE_HEADER, LAYOUT_LABEL,
    LAYOUT_PATTERN_LABEL, LEGACY_DELIMITER, METADATA_HEADER, PRIMARY_COLOR_LABEL,
    SECONDARY_COLOR_LABEL, TYPOGRAPHY_LABEL, VISUAL_FOCUS_LABEL, locate_image_suggestion,
};
use postcraft_core::{
    ColorPalette, DEFAULT_DECORATIVE_ELEMENTS, DEFAULT_LAYOUT_STYLE, DEFAULT_OVERALL_AESTHETIC,
    DEFAULT_PRIMARY_COLOR, DEFAULT_TYPOGRAPHY_STYLE, Page, PageType, VisualGuide, VisualMetadata,
};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

fn field_regex(label: &str, value: &str) -> Regex {
    Regex::new(&format!(r"{}[ \t]*[：:\-][ \t]*({})", label, value)).expect("Valid field regex")
}

static PRIMARY_COLOR: LazyLock<Regex> =
    LazyLock::new(|| field_regex(PRIMARY_COLOR_LABEL, r"[^\n，,]+"));
static SECONDARY_COLORS: LazyLock<Regex> =
    LazyLock::new(|| field_regex(&format!("{}(?:调)?", SECONDARY_COLOR_LABEL), r"[^\n]+"));
static TYPOGRAPHY: LazyLock<Regex> = LazyLock::new(|| field_regex(TYPOGRAPHY_LABEL, r"[^\n]+"));
static LAYOUT: LazyLock<Regex> = LazyLock::new(|| field_regex(LAYOUT_LABEL, r"[^\n]+"));
static DECORATIVE: LazyLock<Regex> = LazyLock::new(|| field_regex(DECORATIVE_LABEL, r"[^\n]+"));
static AESTHETIC: LazyLock<Regex> = LazyLock::new(|| field_regex(AESTHETIC_LABEL, r"[^\n]+"));
static VISUAL_FOCUS: LazyLock<Regex> =
    LazyLock::new(|| field_regex(VISUAL_FOCUS_LABEL, r"[^\n]+"));
static LAYOUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| field_regex(LAYOUT_PATTERN_LABEL, r"[^\n]+"));
static DECORATIVE_STYLE: LazyLock<Regex> =
    LazyLock::new(|| field_regex(DECORATIVE_STYLE_LABEL, r"[^\n]+"));

static GUIDE_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<page>|\[(?:封面|内容|总结)\]").expect("Valid guide boundary regex")
});
static PAGE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<page>").expect("Valid page delimiter regex"));
static TYPE_TAG_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(?:封面|内容|总结)\]").expect("Valid type tag regex"));
static LEADING_TYPE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]\s]+)\]\s*").expect("Valid leading tag regex"));
static LEGACY_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)type:\s*((?-u:\w)+)[ \t]*\n?").expect("Valid legacy type regex")
});
static CONTENT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^content:\s*").expect("Valid content prefix regex"));
static PAGE_TAG_RESIDUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?page>").expect("Valid page tag regex"));

/// Guide and pages recovered from raw model text, before count normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOutline {
    /// Global guide, absent when the header marker is missing
    pub visual_guide: Option<VisualGuide>,
    /// Pages in the order they appeared, never empty
    pub pages: Vec<Page>,
}

/// Parse raw outline text into a guide and at least one page.
///
/// # Examples
///
/// ```
/// use postcraft_core::PageType;
/// use postcraft_outline::parse_outline;
///
/// let parsed = parse_outline("<page>\n[封面]\n秋日穿搭\n\n配图建议：落叶街道");
/// assert!(parsed.visual_guide.is_none());
/// assert_eq!(parsed.pages[0].page_type, PageType::Cover);
/// assert_eq!(parsed.pages[0].image_prompt.as_deref(), Some("落叶街道"));
///
/// let fallback = parse_outline("");
/// assert_eq!(fallback.pages.len(), 1);
/// ```
#[tracing::instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn parse_outline(raw: &str) -> ParsedOutline {
    let (visual_guide, remainder) = split_visual_guide(raw);

    let pages: Vec<Page> = split_segments(&remainder)
        .into_iter()
        .enumerate()
        .map(|(index, segment)| parse_segment(index, segment))
        .collect();

    let pages = if pages.is_empty() {
        debug!("No page segments found, using raw text as one content page");
        vec![Page::new(0, PageType::Content, raw)]
    } else {
        pages
    };

    debug!(
        page_count = pages.len(),
        has_guide = visual_guide.is_some(),
        "Parsed outline"
    );
    ParsedOutline {
        visual_guide,
        pages,
    }
}

/// Extract the guide block and return the text with the block removed.
///
/// The block runs from the header to the first page delimiter or type tag,
/// or to the end of the text.
fn split_visual_guide(raw: &str) -> (Option<VisualGuide>, String) {
    let Some(start) = raw.find(GUIDE_HEADER) else {
        return (None, raw.trim().to_string());
    };
    let body_start = start + GUIDE_HEADER.len();
    let end = GUIDE_BOUNDARY
        .find(&raw[body_start..])
        .map(|m| body_start + m.start())
        .unwrap_or(raw.len());

    let guide = parse_visual_guide(&raw[body_start..end]);
    debug!(primary = %guide.color_palette.primary, "Parsed visual guide");

    let remainder = format!("{}{}", &raw[..start], &raw[end..]);
    (Some(guide), remainder.trim().to_string())
}

/// Parse guide fields, defaulting each missing field independently.
pub fn parse_visual_guide(text: &str) -> VisualGuide {
    let defaults = ColorPalette::default();
    let secondary = capture(&SECONDARY_COLORS, text)
        .map(|value| split_colors(&value))
        .filter(|colors| !colors.is_empty())
        .unwrap_or(defaults.secondary);

    VisualGuide {
        color_palette: ColorPalette {
            primary: capture(&PRIMARY_COLOR, text)
                .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string()),
            secondary,
        },
        typography_style: capture(&TYPOGRAPHY, text)
            .unwrap_or_else(|| DEFAULT_TYPOGRAPHY_STYLE.to_string()),
        layout_style: capture(&LAYOUT, text).unwrap_or_else(|| DEFAULT_LAYOUT_STYLE.to_string()),
        decorative_elements: capture(&DECORATIVE, text)
            .unwrap_or_else(|| DEFAULT_DECORATIVE_ELEMENTS.to_string()),
        overall_aesthetic: capture(&AESTHETIC, text)
            .unwrap_or_else(|| DEFAULT_OVERALL_AESTHETIC.to_string()),
    }
}

/// Parse per-page metadata fields. Missing fields stay `None`.
pub fn parse_visual_metadata(text: &str) -> VisualMetadata {
    VisualMetadata {
        primary_color: capture(&PRIMARY_COLOR, text),
        secondary_colors: capture(&SECONDARY_COLORS, text)
            .map(|value| split_colors(&value))
            .filter(|colors| !colors.is_empty()),
        visual_focus: capture(&VISUAL_FOCUS, text),
        layout_pattern: capture(&LAYOUT_PATTERN, text),
        decorative_style: capture(&DECORATIVE_STYLE, text),
    }
}

fn capture(regex: &Regex, text: &str) -> Option<String> {
    regex
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

fn split_colors(value: &str) -> Vec<String> {
    value
        .split(['，', ',', '、'])
        .map(str::trim)
        .filter(|color| !color.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split into page segments by `<page>`, else `---`, else before each type tag.
fn split_segments(text: &str) -> Vec<&str> {
    let segments: Vec<&str> = if PAGE_SPLIT.is_match(text) {
        PAGE_SPLIT.split(text).collect()
    } else if text.contains(LEGACY_DELIMITER) {
        text.split(LEGACY_DELIMITER).collect()
    } else {
        let mut starts: Vec<usize> = TYPE_TAG_ANYWHERE
            .find_iter(text)
            .map(|m| m.start())
            .collect();
        starts.insert(0, 0);
        starts.push(text.len());
        starts.windows(2).map(|w| &text[w[0]..w[1]]).collect()
    };

    segments
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}

fn parse_segment(index: usize, segment: &str) -> Page {
    let (page_type, mut content) = take_page_type(segment);

    let mut visual_metadata = None;
    if let Some(start) = content.find(METADATA_HEADER) {
        let body_start = start + METADATA_HEADER.len();
        let end = content[body_start..]
            .find("\n\n")
            .map(|offset| body_start + offset)
            .unwrap_or(content.len());
        let metadata = parse_visual_metadata(&content[body_start..end]);
        debug!(index, ?metadata, "Extracted page visual metadata");
        visual_metadata = Some(metadata).filter(|metadata| !metadata.is_empty());
        content = format!("{}{}", &content[..start], &content[end..])
            .trim()
            .to_string();
    }

    let content = CONTENT_PREFIX.replace(content.trim(), "").trim().to_string();
    let mut content = PAGE_TAG_RESIDUE.replace_all(&content, "").trim().to_string();

    let mut image_prompt = None;
    if let Some(found) = locate_image_suggestion(&content) {
        content = format!(
            "{}{}",
            &content[..found.span.start],
            &content[found.span.end..]
        )
        .trim()
        .to_string();
        image_prompt = Some(found.text);
    }
    debug!(index, %page_type, has_image_prompt = image_prompt.is_some(), "Parsed page segment");

    Page {
        index,
        page_type,
        content,
        image_prompt,
        visual_metadata,
    }
}

/// Read the leading `[tag]`, else a legacy `type: word` line. Untyped segments are content.
fn take_page_type(segment: &str) -> (PageType, String) {
    if let Some(caps) = LEADING_TYPE_TAG.captures(segment) {
        let page_type = caps
            .get(1)
            .and_then(|tag| PageType::from_tag(tag.as_str()))
            .unwrap_or_default();
        let content = LEADING_TYPE_TAG.replace(segment, "").to_string();
        return (page_type, content);
    }
    if let Some(caps) = LEGACY_TYPE.captures(segment) {
        let page_type = caps
            .get(1)
            .and_then(|word| PageType::from_keyword(word.as_str()))
            .unwrap_or_default();
        let content = LEGACY_TYPE.replace(segment, "").to_string();
        return (page_type, content);
    }
    (PageType::default(), segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_with_dash_separators() {
        let guide = parse_visual_guide(
            "配色方案：主色调 - 温暖的咖啡棕色，辅助色 - 米白色、浅灰色、淡金色\n字体风格：圆体",
        );
        assert_eq!(guide.color_palette.primary, "温暖的咖啡棕色");
        assert_eq!(
            guide.color_palette.secondary,
            vec!["米白色", "浅灰色", "淡金色"]
        );
        assert_eq!(guide.typography_style, "圆体");
        assert_eq!(guide.layout_style, DEFAULT_LAYOUT_STYLE);
    }

    #[test]
    fn test_field_value_does_not_spill_to_next_line() {
        let guide = parse_visual_guide("字体风格：\n布局风格：网格");
        assert_eq!(guide.typography_style, DEFAULT_TYPOGRAPHY_STYLE);
        assert_eq!(guide.layout_style, "网格");
    }

    #[test]
    fn test_metadata_accepts_secondary_tone_label() {
        let metadata = parse_visual_metadata("- 辅助色调：奶白, 浅咖\n- 视觉重点：标题");
        assert_eq!(
            metadata.secondary_colors,
            Some(vec!["奶白".to_string(), "浅咖".to_string()])
        );
        assert_eq!(metadata.visual_focus.as_deref(), Some("标题"));
        assert!(metadata.primary_color.is_none());
    }

    #[test]
    fn test_split_prefers_page_delimiter() {
        let segments = split_segments("<page>a\n---\nb<PAGE>c");
        assert_eq!(segments, vec!["a\n---\nb", "c"]);
    }

    #[test]
    fn test_split_legacy_delimiter() {
        let segments = split_segments("[封面]a\n---\n[内容]b");
        assert_eq!(segments, vec!["[封面]a", "[内容]b"]);
    }

    #[test]
    fn test_split_before_type_tags() {
        let segments = split_segments("前言\n[封面]标题\n[内容]正文\n[总结]要点");
        assert_eq!(segments, vec!["前言", "[封面]标题", "[内容]正文", "[总结]要点"]);
    }

    #[test]
    fn test_unknown_tag_is_content() {
        let (page_type, content) = take_page_type("[目录]\n第一章");
        assert_eq!(page_type, PageType::Content);
        assert_eq!(content, "第一章");
    }

    #[test]
    fn test_legacy_type_line() {
        let (page_type, content) = take_page_type("Type: Summary\n要点回顾");
        assert_eq!(page_type, PageType::Summary);
        assert_eq!(content, "要点回顾");
    }
}
