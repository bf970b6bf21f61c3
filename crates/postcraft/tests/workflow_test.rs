use async_trait::async_trait;
use postcraft::{
    AestheticSelector, DirectoryTemplateSource, Favorites, FileStore, ImageGeneration,
    ImageGenerator, ImageOptions, ImagePromptAssembler, KeyValueStore, OutlineGenerator,
    PageImageGenerator, PageImageRequest, PageType, PostcraftConfig, PostcraftResult,
    ReferenceImage, SequenceRandom, StylePresetCatalog, TemplatePromptGenerator, TextGeneration,
    TextGenerator, TokenUsage, plan_prompt_batch_with_config,
};
use std::sync::{Arc, Mutex};

const OUTLINE: &str = "【全局视觉指南】
主色调：奶油白
辅助色调：燕麦色，浅咖色
字体风格：圆润无衬线
布局风格：大面积留白
装饰元素：细线框
整体美学：温柔松弛

<page>
[封面]
秋季穿搭指南
配图建议：落叶街景中的穿搭博主

<page>
[内容]
主色调：奶油白
视觉焦点：针织开衫
第一招：叠穿出层次

<page>
[总结]
总结：舒适第一";

struct CannedText {
    text: String,
}

#[async_trait]
impl TextGenerator for CannedText {
    async fn generate_text(
        &self,
        _prompt: &str,
        _system_prompt: &str,
    ) -> PostcraftResult<TextGeneration> {
        Ok(TextGeneration {
            text: self.text.clone(),
            usage: TokenUsage::default(),
        })
    }
}

/// Image model recording every prompt and temperature it receives.
#[derive(Default)]
struct RecordingImages {
    calls: Mutex<Vec<(String, f32)>>,
}

#[async_trait]
impl ImageGenerator for RecordingImages {
    async fn generate_image(
        &self,
        prompt: &str,
        _reference_images: &[ReferenceImage],
        options: &ImageOptions,
    ) -> PostcraftResult<ImageGeneration> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), options.temperature));
        Ok(ImageGeneration {
            image_data: Some("aW1hZ2U=".to_string()),
            usage: TokenUsage {
                prompt_tokens: 10,
                candidates_tokens: 1,
                total_tokens: 11,
            },
        })
    }
}

#[tokio::test]
async fn test_outline_to_page_images() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()).expect("store"));
    let config = PostcraftConfig::default();

    let styles = Arc::new(
        StylePresetCatalog::bundled()
            .with_store(Arc::clone(&store), config.storage.style_overrides_key.clone()),
    );
    styles.save_custom_prompt("ins_minimal", "  极简奶油风，低饱和，柔光  ");

    let outlines = OutlineGenerator::with_config(
        CannedText {
            text: OUTLINE.to_string(),
        },
        Arc::clone(&styles),
        config.outline.clone(),
    );
    let outline = outlines
        .generate_outline("秋季穿搭", Some(3), Some("ins_minimal"))
        .await
        .expect("outline");

    assert_eq!(outline.pages.len(), 3);
    assert_eq!(outline.pages[0].page_type, PageType::Cover);
    assert_eq!(outline.pages[2].page_type, PageType::Summary);

    let assembler = ImagePromptAssembler::with_config(
        Arc::clone(&styles),
        AestheticSelector::new(Arc::new(SequenceRandom::new(vec![0]))),
        config.image.clone(),
    );
    let images = PageImageGenerator::new(RecordingImages::default(), assembler);

    for page in &outline.pages {
        let request = PageImageRequest::from_outline_page(&outline, page, "秋季穿搭")
            .with_style_id("ins_minimal");
        let image = images.generate_page_image(&request).await.expect("image");
        assert_eq!(image.image_data, "aW1hZ2U=");
    }

    let calls = images.client().calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 3);
    for (prompt, temperature) in &calls {
        assert!(prompt.contains("主色调：奶油白"));
        assert!(prompt.contains("极简奶油风，低饱和，柔光"));
        assert!(prompt.contains("秋季穿搭"));
        assert_eq!(*temperature, config.image.temperature_styled);
    }
    assert!(calls[0].0.contains("落叶街景中的穿搭博主"));
}

#[tokio::test]
async fn test_batch_with_directory_templates() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::create_dir_all(dir.path().join("prompt")).expect("prompt dir");
    std::fs::write(
        dir.path().join("prompt/picprompt.md"),
        "生成3D微缩场景电影海报风格的提示词",
    )
    .expect("template file");

    let mut config = PostcraftConfig::default();
    config.batch.max_count = 2;
    let plan = plan_prompt_batch_with_config(
        &["星际穿越", "  ", "千与千寻"],
        &["a lone lighthouse"],
        &config.batch,
    );
    let themes: Vec<String> = plan.tasks.iter().filter_map(|t| t.theme.clone()).collect();
    assert_eq!(themes, vec!["星际穿越".to_string(), "千与千寻".to_string()]);

    let generator = TemplatePromptGenerator::new(
        CannedText {
            text: "\n miniature cinematic diorama \n".to_string(),
        },
        DirectoryTemplateSource::new(dir.path()),
    );
    let prompts = generator
        .generate_prompts("poster", &themes)
        .await
        .expect("prompts");

    assert_eq!(prompts.len(), 2);
    assert!(prompts.iter().all(|p| p.prompt == "miniature cinematic diorama"));
}

#[test]
fn test_favorites_survive_reload() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(dir.path()).expect("store"));
    let key = PostcraftConfig::default().storage.favorites_key;

    let mut favorites = Favorites::load(Arc::clone(&store), &key);
    assert!(favorites.toggle("case-7"));
    assert!(favorites.toggle("case-9"));
    assert!(!favorites.toggle("case-7"));

    let reloaded = Favorites::load(store, &key);
    assert_eq!(reloaded.ids(), ["case-9".to_string()]);
}
