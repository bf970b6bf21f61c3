//! Outline generation: request, text call, parse, normalize, fill.

use crate::{
    ContentFallbackFiller, OutlineRequestBuilder, PageCountNormalizer, TopicContext, parse_outline,
};
use postcraft_catalog::StylePresetCatalog;
use postcraft_core::{Outline, OutlineConfig};
use postcraft_error::PostcraftResult;
use postcraft_interface::TextGenerator;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Turn raw model text into a normalized, filled outline.
///
/// Pure and total: malformed text still yields a valid outline.
///
/// # Example
///
/// ```
/// use postcraft_core::PageType;
/// use postcraft_outline::{TopicContext, assemble_outline};
///
/// let outline = assemble_outline("随便写点什么", &TopicContext::new("咖啡"), Some(2), 5);
/// assert_eq!(outline.pages.len(), 2);
/// assert_eq!(outline.pages[0].page_type, PageType::Cover);
/// assert_eq!(outline.outline, "随便写点什么");
/// ```
pub fn assemble_outline(
    raw: &str,
    context: &TopicContext,
    target_page_count: Option<usize>,
    min_content_pages: usize,
) -> Outline {
    let parsed = parse_outline(raw);
    let pages = PageCountNormalizer::new(min_content_pages).normalize(
        parsed.pages,
        target_page_count,
        context,
    );
    let pages = ContentFallbackFiller::new(context.clone()).fill(pages);
    Outline {
        outline: raw.to_string(),
        pages,
        visual_guide: parsed.visual_guide,
    }
}

/// Drives one outline generation against a text model.
///
/// Upstream failures from the text model are returned unchanged.
pub struct OutlineGenerator<T: TextGenerator> {
    client: T,
    styles: Arc<StylePresetCatalog>,
    config: OutlineConfig,
}

impl<T: TextGenerator> OutlineGenerator<T> {
    /// Generator with default outline settings.
    pub fn new(client: T, styles: Arc<StylePresetCatalog>) -> Self {
        Self::with_config(client, styles, OutlineConfig::default())
    }

    /// Generator with explicit outline settings.
    pub fn with_config(client: T, styles: Arc<StylePresetCatalog>, config: OutlineConfig) -> Self {
        Self {
            client,
            styles,
            config,
        }
    }

    /// The wrapped text model.
    pub fn client(&self) -> &T {
        &self.client
    }

    /// Generate an outline for `topic`.
    ///
    /// # Errors
    ///
    /// Returns the text model's error when the call fails.
    #[instrument(skip(self, topic), fields(topic_len = topic.len()))]
    pub async fn generate_outline(
        &self,
        topic: &str,
        target_page_count: Option<usize>,
        style_id: Option<&str>,
    ) -> PostcraftResult<Outline> {
        let builder = OutlineRequestBuilder::with_config(&self.styles, &self.config);
        let request = builder.build(topic, target_page_count, style_id);

        let mut context = TopicContext::new(topic);
        if let Some(style) = &request.style {
            context = context.with_style_name(style.name.clone());
        }

        debug!(page_count = request.page_count, "Requesting outline text");
        let response = self
            .client
            .generate_text(&request.prompt, &request.system_prompt)
            .await?;
        info!(
            prompt_tokens = response.usage.prompt_tokens,
            candidates_tokens = response.usage.candidates_tokens,
            total_tokens = response.usage.total_tokens,
            "Outline text generated"
        );

        let target = target_page_count.filter(|count| *count > 0);
        let outline = assemble_outline(
            &response.text,
            &context,
            target,
            self.config.min_content_pages,
        );
        info!(
            pages = outline.pages.len(),
            has_guide = outline.visual_guide.is_some(),
            "Outline assembled"
        );
        Ok(outline)
    }
}
