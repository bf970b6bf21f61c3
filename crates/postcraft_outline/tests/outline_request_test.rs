use postcraft_catalog::StylePresetCatalog;
use postcraft_core::OutlineConfig;
use postcraft_outline::OutlineRequestBuilder;

#[test]
fn test_count_is_repeated_in_constraints() {
    let styles = StylePresetCatalog::bundled();
    let request = OutlineRequestBuilder::new(&styles).build("秋季穿搭", Some(6), None);

    assert_eq!(request.page_count, 6);
    assert!(request.prompt.contains("严格控制在 6 页"));
    assert!(request.prompt.contains("必须严格按照 6 页生成"));
    assert!(request.prompt.contains("必须生成恰好 6 页"));
    assert!(request.prompt.contains("秋季穿搭"));
}

#[test]
fn test_contract_markers_present() {
    let styles = StylePresetCatalog::bundled();
    let request = OutlineRequestBuilder::new(&styles).build("咖啡入门", Some(4), None);

    assert!(request.prompt.contains("【全局视觉指南】"));
    assert!(request.prompt.contains("【视觉元数据】"));
    assert!(request.prompt.contains("<page>"));
    assert!(request.prompt.contains("[封面]、[内容] 或 [总结]"));
    assert!(request.prompt.contains("配图建议："));
    assert!(request.prompt.contains("| 竖线符号"));
    assert!(request.prompt.contains("禁止使用\"总结\""));
    assert!(request.prompt.contains("示例输出（3 页）"));
    assert!(!request.prompt.contains("头图模式特别要求"));
}

#[test]
fn test_style_block_embeds_prompt_verbatim() {
    let styles = StylePresetCatalog::bundled();
    let style_prompt = styles.style_prompt("ins_minimal");
    let request = OutlineRequestBuilder::new(&styles).build("秋季穿搭", Some(3), Some("ins_minimal"));

    assert!(request.prompt.contains(style_prompt.trim()));
    assert!(request.prompt.contains("用户已选择「INS 极简」风格"));
    assert!(request.prompt.contains("必须考虑「INS 极简」风格的特点"));
    let style = request.style.expect("style resolves");
    assert_eq!(style.name, "INS 极简");
}

#[test]
fn test_unknown_style_omits_block() {
    let styles = StylePresetCatalog::bundled();
    let request = OutlineRequestBuilder::new(&styles).build("秋季穿搭", Some(3), Some("no_such_style"));

    assert!(request.style.is_none());
    assert!(!request.prompt.contains("用户选择的视觉风格"));
    assert!(!request.prompt.contains("特别重要"));
}

#[test]
fn test_custom_override_is_embedded() {
    let styles = StylePresetCatalog::bundled();
    styles.save_custom_prompt("morandi", "只用灰粉色和雾霾蓝");
    let request = OutlineRequestBuilder::new(&styles).build("家居", Some(2), Some("morandi"));

    assert!(request.prompt.contains("只用灰粉色和雾霾蓝"));
}

#[test]
fn test_single_page_branch() {
    let styles = StylePresetCatalog::bundled();
    let request = OutlineRequestBuilder::new(&styles).build("新品发布", Some(1), None);

    assert!(request.prompt.contains("头图模式特别要求"));
    assert!(request.prompt.contains("示例输出（1 页）"));
    assert!(request.prompt.contains("【头图模式检查】"));
    assert!(!request.prompt.contains("示例输出（3 页）"));
}

#[test]
fn test_missing_count_uses_configured_default() {
    let styles = StylePresetCatalog::bundled();
    let config = OutlineConfig {
        default_page_count: 7,
        system_prompt: "系统提示".to_string(),
        ..OutlineConfig::default()
    };
    let builder = OutlineRequestBuilder::with_config(&styles, &config);

    let request = builder.build("旅行", None, None);
    assert_eq!(request.page_count, 7);
    assert_eq!(request.system_prompt, "系统提示");

    let zero = builder.build("旅行", Some(0), None);
    assert_eq!(zero.page_count, 7);
}
