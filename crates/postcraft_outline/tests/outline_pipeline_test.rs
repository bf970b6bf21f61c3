use async_trait::async_trait;
use postcraft_catalog::StylePresetCatalog;
use postcraft_core::{OutlineConfig, PageType, TextGeneration, TokenUsage};
use postcraft_error::{BackendError, PostcraftErrorKind, PostcraftResult};
use postcraft_interface::TextGenerator;
use postcraft_outline::{OutlineGenerator, TopicContext, assemble_outline};
use std::sync::{Arc, Mutex};

/// Mock text model returning a canned response and recording prompts.
struct MockTextGenerator {
    response: String,
    prompts: Mutex<Vec<(String, String)>>,
}

impl MockTextGenerator {
    fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn recorded(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockTextGenerator {
    async fn generate_text(
        &self,
        prompt: &str,
        system_prompt: &str,
    ) -> PostcraftResult<TextGeneration> {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), system_prompt.to_string()));
        Ok(TextGeneration {
            text: self.response.clone(),
            usage: TokenUsage {
                prompt_tokens: 120,
                candidates_tokens: 80,
                total_tokens: 200,
            },
        })
    }
}

/// Mock text model that always fails.
struct FailingTextGenerator;

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn generate_text(
        &self,
        _prompt: &str,
        _system_prompt: &str,
    ) -> PostcraftResult<TextGeneration> {
        Err(BackendError::new("quota exceeded").into())
    }
}

const AUTUMN_RESPONSE: &str = "【全局视觉指南】
配色方案：主色调 - 燕麦色，辅助色 - 白色、浅驼色
字体风格：细体无衬线
布局风格：大面积留白
装饰元素：细线条
整体美学：克制、高级

<page>
[封面]
【视觉元数据】
- 主色调：燕麦色
- 视觉重点：居中标题
- 布局模式：上下结构
- 装饰风格：细线条

秋季穿搭｜温柔一整季

配图建议：落地窗前的燕麦色针织衫

<page>
[内容]
【视觉元数据】
- 主色调：燕麦色
- 视觉重点：单品平铺
- 布局模式：九宫格
- 装饰风格：细线条

三件必备单品：针织开衫、直筒裤、乐福鞋

配图建议：三件单品平铺在米白色床单上

<page>
[总结]
【视觉元数据】
- 主色调：燕麦色
- 视觉重点：要点列表
- 布局模式：上下结构
- 装饰风格：细线条

记住这几点：同色系叠穿，材质有对比

配图建议：衣架上的同色系搭配";

#[tokio::test]
async fn test_autumn_outfits_with_ins_minimal() {
    let client = MockTextGenerator::new(AUTUMN_RESPONSE);
    let generator = OutlineGenerator::new(client, Arc::new(StylePresetCatalog::bundled()));

    let outline = generator
        .generate_outline("秋季穿搭", Some(3), Some("ins_minimal"))
        .await
        .expect("outline generated");

    assert_eq!(outline.pages.len(), 3);
    assert_eq!(outline.pages[0].page_type, PageType::Cover);
    let indices: Vec<usize> = outline.pages.iter().map(|p| p.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    for page in &outline.pages {
        assert!(!page.image_prompt.as_deref().unwrap_or_default().is_empty());
        assert!(page.visual_metadata.is_some());
    }
    let guide = outline.visual_guide.expect("guide present");
    assert_eq!(guide.color_palette.primary, "燕麦色");
    assert_eq!(outline.outline, AUTUMN_RESPONSE);

    let recorded = generator.client().recorded();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].0.contains("「INS 极简」"));
    assert_eq!(recorded[0].1, OutlineConfig::default().system_prompt);
}

#[tokio::test]
async fn test_single_page_keeps_first_of_two_covers() {
    let client = MockTextGenerator::new("<page>\n[封面]\n第一张封面\n<page>\n[封面]\n第二张封面");
    let generator = OutlineGenerator::new(client, Arc::new(StylePresetCatalog::bundled()));

    let outline = generator
        .generate_outline("新品", Some(1), None)
        .await
        .expect("outline generated");

    assert_eq!(outline.pages.len(), 1);
    assert_eq!(outline.pages[0].page_type, PageType::Cover);
    assert_eq!(outline.pages[0].content, "第一张封面");
    assert!(outline.pages[0].image_prompt.is_some());
}

#[tokio::test]
async fn test_short_response_is_padded() {
    let client = MockTextGenerator::new("<page>[封面]露营清单<page>[内容]帐篷怎么选");
    let generator = OutlineGenerator::new(client, Arc::new(StylePresetCatalog::bundled()));

    let outline = generator
        .generate_outline("露营", Some(5), None)
        .await
        .expect("outline generated");

    assert_eq!(outline.pages.len(), 5);
    assert_eq!(outline.pages[1].content, "帐篷怎么选");
    for page in &outline.pages[2..] {
        assert_eq!(page.page_type, PageType::Content);
        assert!(page.content.contains("露营"));
    }
}

#[tokio::test]
async fn test_untargeted_uses_config() {
    let client = MockTextGenerator::new("<page>[封面]标题");
    let config = OutlineConfig {
        default_page_count: 6,
        min_content_pages: 2,
        ..OutlineConfig::default()
    };
    let generator =
        OutlineGenerator::with_config(client, Arc::new(StylePresetCatalog::bundled()), config);

    let outline = generator
        .generate_outline("读书", None, None)
        .await
        .expect("outline generated");

    assert_eq!(outline.pages.len(), 3);
    assert!(generator.client().recorded()[0].0.contains("严格控制在 6 页"));
}

#[tokio::test]
async fn test_upstream_error_propagates() {
    let generator =
        OutlineGenerator::new(FailingTextGenerator, Arc::new(StylePresetCatalog::bundled()));

    let err = generator
        .generate_outline("读书", Some(3), None)
        .await
        .expect_err("upstream failure");

    match err.kind() {
        PostcraftErrorKind::Backend(e) => assert!(e.message.contains("quota")),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_assemble_unstructured_text() {
    let outline = assemble_outline("模型完全没有遵守格式", &TopicContext::new("咖啡"), Some(3), 5);

    assert_eq!(outline.pages.len(), 3);
    assert_eq!(outline.pages[0].page_type, PageType::Cover);
    assert!(outline.visual_guide.is_none());
    assert!(outline.pages.iter().all(|p| !p.content.trim().is_empty()));
}
