use async_trait::async_trait;
use postcraft_batch::TemplatePromptGenerator;
use postcraft_catalog::PromptTemplateCatalog;
use postcraft_core::{BatchConfig, TextGeneration, TokenUsage};
use postcraft_error::{
    BackendError, GenerationErrorKind, PostcraftErrorKind, PostcraftResult, TemplateErrorKind,
};
use postcraft_interface::{TemplateSource, TextGenerator};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock text model echoing the theme line back as the prompt.
struct EchoTextGenerator {
    blank_for: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl EchoTextGenerator {
    fn new() -> Self {
        Self {
            blank_for: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn blank_for(theme: &str) -> Self {
        Self {
            blank_for: Some(theme.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TextGenerator for EchoTextGenerator {
    async fn generate_text(
        &self,
        prompt: &str,
        system_prompt: &str,
    ) -> PostcraftResult<TextGeneration> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), system_prompt.to_string()));
        let theme = prompt
            .split("【主题】\n")
            .nth(1)
            .and_then(|rest| rest.lines().next())
            .unwrap_or_default()
            .to_string();
        let text = if self.blank_for.as_deref() == Some(theme.as_str()) {
            "   ".to_string()
        } else {
            format!("  prompt for {}  ", theme)
        };
        Ok(TextGeneration {
            text,
            usage: TokenUsage {
                prompt_tokens: 3,
                candidates_tokens: 2,
                total_tokens: 5,
            },
        })
    }
}

/// Mock template source counting fetches.
struct StaticTemplates {
    fail: bool,
    fetches: AtomicUsize,
}

impl StaticTemplates {
    fn ok() -> Self {
        Self {
            fail: false,
            fetches: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TemplateSource for StaticTemplates {
    async fn fetch(&self, path: &str) -> PostcraftResult<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BackendError::new("404 Not Found").into());
        }
        Ok(format!("TEMPLATE({})", path))
    }
}

#[tokio::test]
async fn test_generate_prompt_builds_meta_prompt() {
    let generator = TemplatePromptGenerator::new(EchoTextGenerator::new(), StaticTemplates::ok());

    let result = generator
        .generate_prompt("poster", "秋日咖啡馆")
        .await
        .expect("prompt generated");

    assert_eq!(result.theme, "秋日咖啡馆");
    assert_eq!(result.prompt, "prompt for 秋日咖啡馆");
    assert_eq!(result.usage.total_tokens, 5);

    let calls = generator.client().calls.lock().unwrap().clone();
    assert_eq!(
        calls[0].0,
        "TEMPLATE(prompt/picprompt.md)\n\n【主题】\n秋日咖啡馆\n\n请根据以上模板要求，为这个主题生成一个高质量的英文图像生成提示词（Prompt）。"
    );
    assert_eq!(calls[0].1, BatchConfig::default().template_system_prompt);
}

#[tokio::test]
async fn test_batch_loads_template_once() {
    let source = StaticTemplates::ok();
    let generator = TemplatePromptGenerator::new(EchoTextGenerator::new(), source);

    let results = generator
        .generate_prompts("poster", &["咖啡", "露营", "读书"])
        .await
        .expect("prompts generated");

    let themes: Vec<&str> = results.iter().map(|r| r.theme.as_str()).collect();
    assert_eq!(themes, vec!["咖啡", "露营", "读书"]);
    assert_eq!(results[1].prompt, "prompt for 露营");
    assert_eq!(generator.client().calls.lock().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_template_is_not_found() {
    let generator = TemplatePromptGenerator::new(EchoTextGenerator::new(), StaticTemplates::ok());

    let err = generator
        .generate_prompt("missing", "咖啡")
        .await
        .expect_err("unknown template");

    match err.kind() {
        PostcraftErrorKind::Template(e) => {
            assert_eq!(e.kind, TemplateErrorKind::NotFound("missing".to_string()))
        }
        other => panic!("unexpected error: {}", other),
    }
    assert!(generator.client().calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_disabled_template_is_not_found() {
    let catalog = PromptTemplateCatalog::from_toml(
        r#"
        [[template]]
        id = "draft"
        name = "草稿"
        description = "未启用"
        path = "prompt/draft.md"
        enabled = false
        "#,
    )
    .expect("valid catalog");
    let generator = TemplatePromptGenerator::new(EchoTextGenerator::new(), StaticTemplates::ok())
        .with_catalog(catalog);

    let err = generator.load_template("draft").await.expect_err("disabled");
    assert!(matches!(err.kind(), PostcraftErrorKind::Template(_)));
}

#[tokio::test]
async fn test_fetch_failure_is_load_failed() {
    let generator =
        TemplatePromptGenerator::new(EchoTextGenerator::new(), StaticTemplates::failing());

    let err = generator.load_template("poster").await.expect_err("fetch fails");

    match err.kind() {
        PostcraftErrorKind::Template(e) => match &e.kind {
            TemplateErrorKind::LoadFailed { path, reason } => {
                assert_eq!(path, "prompt/picprompt.md");
                assert!(reason.contains("404"));
            }
            other => panic!("unexpected kind: {}", other),
        },
        other => panic!("unexpected error: {}", other),
    }
}

#[tokio::test]
async fn test_blank_generation_fails_batch() {
    let generator = TemplatePromptGenerator::new(
        EchoTextGenerator::blank_for("露营"),
        StaticTemplates::ok(),
    )
    .with_config(&BatchConfig {
        template_system_prompt: "自定义系统提示".to_string(),
        ..BatchConfig::default()
    });

    let err = generator
        .generate_prompts("poster", &["咖啡", "露营"])
        .await
        .expect_err("blank output");

    match err.kind() {
        PostcraftErrorKind::Generation(e) => {
            assert_eq!(e.kind, GenerationErrorKind::EmptyResponse("露营".to_string()))
        }
        other => panic!("unexpected error: {}", other),
    }
}
