//! Page count enforcement and the single leading cover.

use crate::TopicContext;
use postcraft_core::{Page, PageType, reindex};
use tracing::{debug, instrument};

/// Enforces page count and a single cover at index 0.
///
/// With a target the result has exactly that many pages. Without one the
/// result keeps every non-cover page and pads until `min_content_pages`
/// content pages exist.
///
/// # Example
///
/// ```
/// use postcraft_core::{Page, PageType};
/// use postcraft_outline::{PageCountNormalizer, TopicContext};
///
/// let normalizer = PageCountNormalizer::new(5);
/// let context = TopicContext::new("秋季穿搭");
/// let pages = vec![Page::new(0, PageType::Content, "正文")];
///
/// let pages = normalizer.normalize(pages, Some(3), &context);
/// assert_eq!(pages.len(), 3);
/// assert_eq!(pages[0].page_type, PageType::Cover);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCountNormalizer {
    min_content_pages: usize,
}

impl Default for PageCountNormalizer {
    fn default() -> Self {
        Self::new(5)
    }
}

impl PageCountNormalizer {
    /// Normalizer guaranteeing `min_content_pages` content pages for untargeted outlines.
    pub fn new(min_content_pages: usize) -> Self {
        Self { min_content_pages }
    }

    /// Content pages guaranteed when no target is given.
    pub fn min_content_pages(&self) -> usize {
        self.min_content_pages
    }

    /// Normalize `pages`. `None` or `Some(0)` means no target.
    #[instrument(skip(self, pages, context), fields(input = pages.len()))]
    pub fn normalize(
        &self,
        pages: Vec<Page>,
        target_page_count: Option<usize>,
        context: &TopicContext,
    ) -> Vec<Page> {
        let mut pages = match target_page_count.filter(|count| *count > 0) {
            Some(1) => single_cover(pages, context),
            Some(target) => to_target(pages, target, context),
            None => with_min_content(pages, self.min_content_pages, context),
        };
        reindex(&mut pages);
        debug!(output = pages.len(), "Normalized page count");
        pages
    }
}

fn single_cover(pages: Vec<Page>, context: &TopicContext) -> Vec<Page> {
    let first_cover = pages.iter().position(|page| page.page_type.is_cover());
    let page = match first_cover {
        Some(position) => pages.into_iter().nth(position),
        None => pages.into_iter().next().map(|mut page| {
            debug!("Retyping first page as cover");
            page.page_type = PageType::Cover;
            page
        }),
    };
    vec![page.unwrap_or_else(|| synthesized_cover(context))]
}

fn to_target(pages: Vec<Page>, target: usize, context: &TopicContext) -> Vec<Page> {
    let (covers, others): (Vec<Page>, Vec<Page>) =
        pages.into_iter().partition(|page| page.page_type.is_cover());
    if covers.len() > 1 {
        debug!(discarded = covers.len() - 1, "Discarding extra cover pages");
    }

    let mut result = Vec::with_capacity(target);
    result.push(cover_or_synthesized(covers, context));
    let available = others.len();
    result.extend(others.into_iter().take(target - 1));
    if available > target - 1 {
        debug!(dropped = available - (target - 1), "Truncating trailing pages");
    }

    while result.len() < target {
        let position = result.len();
        result.push(synthesized_content(position, context));
    }
    result
}

fn with_min_content(
    pages: Vec<Page>,
    min_content_pages: usize,
    context: &TopicContext,
) -> Vec<Page> {
    let (covers, others): (Vec<Page>, Vec<Page>) =
        pages.into_iter().partition(|page| page.page_type.is_cover());

    let mut result = vec![cover_or_synthesized(covers, context)];
    result.extend(others);

    let mut content_pages = result
        .iter()
        .filter(|page| page.page_type == PageType::Content)
        .count();
    while content_pages < min_content_pages {
        let position = result.len();
        result.push(synthesized_content(position, context));
        content_pages += 1;
    }
    result
}

fn cover_or_synthesized(covers: Vec<Page>, context: &TopicContext) -> Page {
    covers.into_iter().next().unwrap_or_else(|| {
        debug!("No cover found, synthesizing one");
        synthesized_cover(context)
    })
}

fn synthesized_cover(context: &TopicContext) -> Page {
    Page::new(
        0,
        PageType::Cover,
        format!("{}\n\n开始你的精彩内容之旅", context.topic),
    )
    .with_image_prompt(format!(
        "根据主题 \"{}\" 生成一张吸引人的封面图片{}",
        context.topic,
        context.style_suffix()
    ))
}

fn synthesized_content(position: usize, context: &TopicContext) -> Page {
    debug!(position, "Padding with synthesized content page");
    Page::new(
        position,
        PageType::Content,
        format!(
            "第{}页：深入探讨{}的相关内容，提供更多有价值的信息和见解。",
            position + 1,
            context.topic
        ),
    )
    .with_image_prompt(format!(
        "根据页面内容和主题 \"{}\" 生成一张内容图片{}",
        context.topic,
        context.style_suffix()
    ))
}
