//! Final image prompt assembly for one page.

use crate::negative_prompt;
use crate::sections::{self, CONSTRAINT_MARKER, GUIDE_MARKER};
use derive_getters::Getters;
use derive_setters::Setters;
use postcraft_catalog::{AestheticSelector, StylePresetCatalog};
use postcraft_core::markers::locate_image_suggestion;
use postcraft_core::{ImageConfig, Outline, Page, PageType, VisualGuide, VisualMetadata};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Style text used when a style id resolves to nothing.
pub const GENERIC_STYLE_PROMPT: &str =
    "专业、干净、现代设计，清晰可读的中文文字，无水印、logo或标识。";

/// Everything the assembler needs to know about one page.
///
/// # Example
///
/// ```
/// use postcraft_core::PageType;
/// use postcraft_image::PageImageRequest;
///
/// let request = PageImageRequest::new("封面标题", PageType::Cover, 0, 1)
///     .with_topic("秋季穿搭")
///     .with_style_id("ins_minimal");
///
/// assert!(request.is_head_image());
/// assert_eq!(request.style_id().as_deref(), Some("ins_minimal"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Getters, Setters)]
#[setters(prefix = "with_", into, strip_option)]
pub struct PageImageRequest {
    /// Page caption text
    page_content: String,
    /// Page role
    page_type: PageType,
    /// Zero-based position
    page_index: usize,
    /// Pages in the outline
    total_pages: usize,
    /// User topic
    topic: String,
    /// Raw outline text quoted as context
    full_outline: String,
    /// Selected style
    style_id: Option<String>,
    /// Post-wide visual guide
    visual_guide: Option<VisualGuide>,
    /// Per-page visual metadata
    visual_metadata: Option<VisualMetadata>,
    /// Caller template replacing the built-in composition
    custom_template: Option<String>,
    /// Explicit image suggestion
    image_prompt: Option<String>,
}

impl PageImageRequest {
    /// Request for a page at `page_index` of `total_pages`.
    pub fn new(
        page_content: impl Into<String>,
        page_type: PageType,
        page_index: usize,
        total_pages: usize,
    ) -> Self {
        Self {
            page_content: page_content.into(),
            page_type,
            page_index,
            total_pages,
            ..Self::default()
        }
    }

    /// Request for one page of a generated outline, carrying its guide, metadata and suggestion.
    pub fn from_outline_page(outline: &Outline, page: &Page, topic: impl Into<String>) -> Self {
        Self {
            page_content: page.content.clone(),
            page_type: page.page_type,
            page_index: page.index,
            total_pages: outline.pages.len(),
            topic: topic.into(),
            full_outline: outline.outline.clone(),
            visual_guide: outline.visual_guide.clone(),
            visual_metadata: page.visual_metadata.clone(),
            image_prompt: page.image_prompt.clone(),
            ..Self::default()
        }
    }

    /// Single-cover outline: the page is the post's only image.
    pub fn is_head_image(&self) -> bool {
        self.total_pages == 1 && self.page_index == 0 && self.page_type.is_cover()
    }

    fn explicit_suggestion(&self) -> Option<&str> {
        self.image_prompt
            .as_deref()
            .map(str::trim)
            .filter(|prompt| !prompt.is_empty())
    }

    fn selected_style(&self) -> Option<&str> {
        self.style_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Assembled image prompt and generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AssembledPrompt {
    /// Prompt body without the negative suffix
    pub prompt: String,
    /// Comma-joined forbidden terms
    pub negative_prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Whether head-image mode applied
    pub head_image: bool,
}

impl AssembledPrompt {
    /// Prompt body followed by the forbidden-elements suffix, as sent to the image model.
    pub fn full_prompt(&self) -> String {
        format!(
            "{}\n\n{}",
            self.prompt,
            sections::negative_suffix(&self.negative_prompt)
        )
    }
}

struct StyleText {
    name: String,
    prompt: String,
}

/// Builds image prompts from page data, the guide and the style catalog.
///
/// Sections are composed in a fixed order, each omitted when its source data
/// is absent. A custom template replaces the built-in composition, with the
/// guide, constraint, style and suggestion blocks injected when the template
/// lacks them.
///
/// # Example
///
/// ```
/// use postcraft_catalog::{AestheticSelector, SequenceRandom, StylePresetCatalog};
/// use postcraft_core::PageType;
/// use postcraft_image::{ImagePromptAssembler, PageImageRequest};
/// use std::sync::Arc;
///
/// let assembler = ImagePromptAssembler::new(
///     Arc::new(StylePresetCatalog::bundled()),
///     AestheticSelector::new(Arc::new(SequenceRandom::new(vec![0]))),
/// );
/// let request = PageImageRequest::new("第一步：准备器具", PageType::Content, 1, 3)
///     .with_topic("手冲咖啡");
///
/// let assembled = assembler.assemble(&request);
/// assert!(assembled.prompt.starts_with("【合规要求】"));
/// assert_eq!(assembled.temperature, 1.0);
/// assert!(assembled.full_prompt().contains("【禁止元素】watermark"));
/// ```
#[derive(Debug, Clone)]
pub struct ImagePromptAssembler {
    styles: Arc<StylePresetCatalog>,
    selector: AestheticSelector,
    config: ImageConfig,
}

impl ImagePromptAssembler {
    /// Assembler with default image settings.
    pub fn new(styles: Arc<StylePresetCatalog>, selector: AestheticSelector) -> Self {
        Self::with_config(styles, selector, ImageConfig::default())
    }

    /// Assembler with explicit image settings.
    pub fn with_config(
        styles: Arc<StylePresetCatalog>,
        selector: AestheticSelector,
        config: ImageConfig,
    ) -> Self {
        Self {
            styles,
            selector,
            config,
        }
    }

    /// Image settings in use.
    pub fn config(&self) -> &ImageConfig {
        &self.config
    }

    /// Assemble the prompt for one page.
    #[instrument(
        skip(self, request),
        fields(page_index = request.page_index, page_type = %request.page_type)
    )]
    pub fn assemble(&self, request: &PageImageRequest) -> AssembledPrompt {
        let head_image = request.is_head_image();
        let content = safe_content(request);
        let style = request.selected_style().map(|id| self.resolve_style(id));

        let style_section = style.as_ref().map(|style| {
            let keyword_count = if head_image { 3 } else { 2 };
            let selection = self
                .selector
                .select(&content, request.page_type, keyword_count);
            sections::style_requirements(&style.prompt, &sections::aesthetic_parameters(&selection))
        });
        let guide_section = request.visual_guide.as_ref().map(sections::visual_guide);
        let constraint_section = sections::page_constraint(
            request.page_type,
            request.visual_guide.as_ref(),
            request.visual_metadata.as_ref(),
        );
        let suggestion_section = match request.explicit_suggestion() {
            Some(suggestion) => Some(sections::image_suggestion(suggestion, true)),
            None => locate_image_suggestion(&content)
                .map(|found| sections::image_suggestion(&found.text, false)),
        };

        let custom_template = request
            .custom_template
            .as_deref()
            .filter(|template| !template.is_empty());
        let prompt = match custom_template {
            Some(template) => {
                let mut prompt = substitute(template, request, style.as_ref());
                if let Some(block) = guide_section
                    .as_deref()
                    .filter(|_| !prompt.contains(GUIDE_MARKER))
                {
                    debug!("Injecting visual guide into custom template");
                    prompt = format!("{}\n\n{}", block, prompt);
                }
                if let Some(block) = constraint_section
                    .as_deref()
                    .filter(|_| !prompt.contains(CONSTRAINT_MARKER))
                {
                    debug!("Injecting page constraint into custom template");
                    prompt = insert_after_marker(&prompt, GUIDE_MARKER, block);
                }
                if let Some(block) = style_section
                    .as_deref()
                    .filter(|_| !prompt.contains("风格要求") && !prompt.contains("style"))
                {
                    debug!("Injecting style requirements into custom template");
                    prompt = insert_after_marker(&prompt, CONSTRAINT_MARKER, block);
                }
                if let Some(block) = suggestion_section
                    .as_deref()
                    .filter(|_| !prompt.contains("配图建议"))
                {
                    prompt = format!("{}\n\n{}", block, prompt);
                }
                if head_image && !prompt.contains("头图") && !prompt.contains("head image") {
                    prompt.push_str("\n\n");
                    prompt.push_str(&sections::head_image_requirements());
                }
                prompt
            }
            None => {
                let mut blocks = vec![sections::compliance()];
                blocks.extend(guide_section);
                blocks.extend(constraint_section);
                blocks.extend(style_section);
                blocks.extend(suggestion_section);
                blocks.push(sections::technical_specs(head_image, &self.config));
                blocks.push(sections::page_content(&content));
                blocks.push(sections::page_type_line(request.page_type, head_image));
                blocks.push(sections::design_guidance(style.is_some()));
                blocks.push(sections::design_requirements(request.page_type, head_image));
                blocks.extend(sections::style_consistency(
                    request.page_type,
                    style.as_ref().map(|style| style.name.as_str()),
                ));
                blocks.push(sections::context_reference(
                    &request.topic,
                    &request.full_outline,
                ));
                blocks.join("\n\n")
            }
        };

        let negative_prompt = negative_prompt(request.selected_style(), head_image);
        let temperature = self.temperature(head_image, style.is_some(), custom_template.is_some());
        debug!(
            head_image,
            temperature,
            prompt_len = prompt.len(),
            custom = custom_template.is_some(),
            "Assembled image prompt"
        );

        AssembledPrompt {
            prompt,
            negative_prompt,
            temperature,
            head_image,
        }
    }

    fn resolve_style(&self, style_id: &str) -> StyleText {
        let name = self.styles.name(style_id).unwrap_or(style_id).to_string();
        let prompt = self.styles.style_prompt(style_id);
        if prompt.trim().is_empty() {
            warn!(style_id, "Style missing or empty, using generic style text");
            return StyleText {
                name,
                prompt: GENERIC_STYLE_PROMPT.to_string(),
            };
        }
        debug!(style_id, prompt_len = prompt.len(), "Resolved style prompt");
        StyleText { name, prompt }
    }

    fn temperature(&self, head_image: bool, has_style: bool, has_template: bool) -> f32 {
        if head_image {
            self.config.temperature_head_image
        } else if has_style {
            self.config.temperature_styled
        } else if has_template {
            self.config.temperature_custom
        } else {
            self.config.temperature_default
        }
    }
}

/// Page content, or a stand-in when the page text is blank.
fn safe_content(request: &PageImageRequest) -> String {
    if !request.page_content.trim().is_empty() {
        return request.page_content.clone();
    }
    match request.explicit_suggestion() {
        Some(suggestion) => format!("配图建议：{}", suggestion),
        None => format!(
            "本页为{}页，主题：{}。请根据整体大纲生成一张适配的小红书风格图片。",
            request.page_type.tag(),
            request.topic
        ),
    }
}

fn substitute(template: &str, request: &PageImageRequest, style: Option<&StyleText>) -> String {
    template
        .replace("{{page_content}}", &request.page_content)
        .replace("{{page_type}}", &request.page_type.to_string())
        .replace("{{page_index}}", &(request.page_index + 1).to_string())
        .replace("{{total_pages}}", &request.total_pages.to_string())
        .replace("{{topic}}", &request.topic)
        .replace("{{full_outline}}", &request.full_outline)
        .replace(
            "{{style_prompt}}",
            style.map(|style| style.prompt.as_str()).unwrap_or_default(),
        )
        .replace(
            "{{image_prompt}}",
            request.image_prompt.as_deref().unwrap_or_default(),
        )
        .replace("{{title_color}}", "")
}

/// Insert `block` after the first blank line following `marker`.
///
/// Without the marker the block is prepended.
fn insert_after_marker(prompt: &str, marker: &str, block: &str) -> String {
    let Some(start) = prompt.find(marker) else {
        return format!("{}\n\n{}", block, prompt);
    };
    match prompt[start..].find("\n\n") {
        Some(offset) => {
            let at = start + offset + 2;
            format!("{}{}\n\n{}", &prompt[..at], block, &prompt[at..])
        }
        None => format!("{}\n{}", prompt, block),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_content_prefers_suggestion() {
        let request = PageImageRequest::new("  ", PageType::Content, 1, 3)
            .with_topic("咖啡")
            .with_image_prompt("咖啡豆特写");
        assert_eq!(safe_content(&request), "配图建议：咖啡豆特写");
    }

    #[test]
    fn test_safe_content_page_sentence() {
        let request = PageImageRequest::new("", PageType::Summary, 2, 3).with_topic("咖啡");
        assert_eq!(
            safe_content(&request),
            "本页为总结页，主题：咖啡。请根据整体大纲生成一张适配的小红书风格图片。"
        );
    }

    #[test]
    fn test_insert_after_marker() {
        assert_eq!(
            insert_after_marker("A全局视觉指南x\n\nB", GUIDE_MARKER, "C"),
            "A全局视觉指南x\n\nC\n\nB"
        );
        assert_eq!(insert_after_marker("B", GUIDE_MARKER, "C"), "C\n\nB");
        assert_eq!(
            insert_after_marker("全局视觉指南", GUIDE_MARKER, "C"),
            "全局视觉指南\nC"
        );
    }

    #[test]
    fn test_placeholders() {
        let request = PageImageRequest::new("正文", PageType::Content, 1, 4)
            .with_topic("咖啡")
            .with_full_outline("大纲");
        let text = substitute(
            "{{page_type}} {{page_index}}/{{total_pages}} {{topic}} {{page_content}} {{full_outline}} [{{style_prompt}}][{{image_prompt}}][{{title_color}}]",
            &request,
            None,
        );
        assert_eq!(text, "content 2/4 咖啡 正文 大纲 [][][]");
    }
}
