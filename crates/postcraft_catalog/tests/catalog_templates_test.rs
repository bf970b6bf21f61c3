//! Tests for the prompt template catalog.

use postcraft_catalog::PromptTemplateCatalog;

#[test]
fn test_bundled_poster_template() {
    let catalog = PromptTemplateCatalog::bundled();
    let poster = catalog.get("poster").unwrap();

    assert_eq!(poster.name(), "海报风格");
    assert!(*poster.enabled());
    assert_eq!(catalog.enabled().count(), 1);
}

#[test]
fn test_disabled_template_is_hidden() {
    let catalog = PromptTemplateCatalog::from_toml(
        r#"
[[template]]
id = "draft"
name = "草稿"
description = "未发布"
path = "prompt/draft.md"
enabled = false
"#,
    )
    .unwrap();

    assert!(catalog.get("draft").is_none());
    assert_eq!(catalog.enabled().count(), 0);
}
