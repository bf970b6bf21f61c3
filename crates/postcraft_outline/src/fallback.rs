//! Synthesized text for pages the model left empty.

use crate::TopicContext;
use postcraft_core::{Page, PageType};
use tracing::debug;

/// Fills empty page content and image suggestions from the topic, style and page type.
///
/// Pages whose fields are already non-blank are left untouched, so filling
/// twice equals filling once. Type, index and metadata never change.
///
/// # Example
///
/// ```
/// use postcraft_core::{Page, PageType};
/// use postcraft_outline::{ContentFallbackFiller, TopicContext};
///
/// let filler = ContentFallbackFiller::new(TopicContext::new("秋季穿搭"));
/// let pages = filler.fill(vec![Page::new(0, PageType::Cover, "  ")]);
///
/// assert!(pages[0].content.contains("秋季穿搭"));
/// assert!(pages[0].image_prompt.is_some());
/// assert_eq!(filler.fill(pages.clone()), pages);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFallbackFiller {
    context: TopicContext,
}

impl ContentFallbackFiller {
    /// Filler for one topic context.
    pub fn new(context: TopicContext) -> Self {
        Self { context }
    }

    /// Fill every page.
    pub fn fill(&self, pages: Vec<Page>) -> Vec<Page> {
        pages.into_iter().map(|page| self.fill_page(page)).collect()
    }

    /// Fill one page.
    pub fn fill_page(&self, mut page: Page) -> Page {
        if page.content.trim().is_empty() {
            debug!(index = page.index, page_type = %page.page_type, "Filling empty content");
            page.content = self.content_for(page.page_type);
        }
        let missing_prompt = page
            .image_prompt
            .as_deref()
            .is_none_or(|prompt| prompt.trim().is_empty());
        if missing_prompt {
            debug!(
                index = page.index,
                page_type = %page.page_type,
                "Filling empty image suggestion"
            );
            page.image_prompt = Some(self.image_prompt_for(page.page_type));
        }
        page
    }

    fn content_for(&self, page_type: PageType) -> String {
        let topic = &self.context.topic;
        match page_type {
            PageType::Cover => format!("{}\n\n开始你的精彩内容之旅", topic),
            PageType::Summary => format!(
                "围绕主题「{}」的关键要点回顾，用生活化的方式帮助读者记住重点。",
                topic
            ),
            PageType::Content => format!(
                "围绕主题「{}」补充一页有价值的内容，提供具体案例、技巧或注意事项。",
                topic
            ),
        }
    }

    fn image_prompt_for(&self, page_type: PageType) -> String {
        let topic = &self.context.topic;
        let hint = self.context.style_hint();
        match page_type {
            PageType::Cover => format!(
                "生成一张与主题「{}」相关的吸睛封面配图，突出标题和整体氛围{}。",
                topic, hint
            ),
            PageType::Summary => format!(
                "生成一张与主题「{}」相关的配图，用清晰的信息图或要点列表的方式呈现关键信息{}。",
                topic, hint
            ),
            PageType::Content => format!(
                "根据本页内容生成一张小红书风格的配图，突出关键信息和视觉对比效果{}。",
                hint
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_core::VisualMetadata;

    #[test]
    fn test_keeps_existing_fields() {
        let filler = ContentFallbackFiller::new(TopicContext::new("咖啡"));
        let page = Page::new(2, PageType::Content, "手冲步骤").with_image_prompt("手冲壶特写");
        assert_eq!(filler.fill_page(page.clone()), page);
    }

    #[test]
    fn test_style_hint_reaches_image_prompt() {
        let context = TopicContext::new("咖啡").with_style_name("莫兰迪风格");
        let filler = ContentFallbackFiller::new(context);
        let page = filler.fill_page(Page::new(1, PageType::Summary, "要点"));
        assert_eq!(
            page.image_prompt.as_deref(),
            Some("生成一张与主题「咖啡」相关的配图，用清晰的信息图或要点列表的方式呈现关键信息，并符合「莫兰迪风格」风格要求。")
        );
    }

    #[test]
    fn test_blank_prompt_is_replaced_and_metadata_kept() {
        let filler = ContentFallbackFiller::new(TopicContext::new("咖啡"));
        let metadata = VisualMetadata {
            visual_focus: Some("杯子".to_string()),
            ..Default::default()
        };
        let page = Page::new(3, PageType::Content, "")
            .with_image_prompt(" \n")
            .with_visual_metadata(metadata.clone());
        let filled = filler.fill_page(page);
        assert_eq!(filled.index, 3);
        assert_eq!(filled.visual_metadata, Some(metadata));
        assert!(filled.content.contains("咖啡"));
        assert!(!filled.image_prompt.unwrap_or_default().trim().is_empty());
    }
}
