//! Named prompt sections.
//!
//! Each builder returns one block without surrounding blank lines. Callers
//! join blocks with a blank line in a fixed order.

use postcraft_catalog::AestheticSelection;
use postcraft_core::{ImageConfig, PageType, VisualGuide, VisualMetadata};

/// Marker text that identifies the guide block inside a prompt.
pub(crate) const GUIDE_MARKER: &str = "全局视觉指南";
/// Marker text that identifies the per-page constraint block.
pub(crate) const CONSTRAINT_MARKER: &str = "当前页视觉约束";

pub(crate) fn compliance() -> String {
    "【合规要求】\n\
     - 禁止包含任何小红书的logo、用户ID或品牌标识\n\
     - 禁止包含水印、logo或任何标记（尤其是右下角、左上角）\n\
     - 如果参考图片中有水印或logo，必须完全去除"
        .to_string()
}

pub(crate) fn visual_guide(guide: &VisualGuide) -> String {
    format!(
        "【全局视觉指南 - 所有页面必须严格遵守】\n\
         主色调：{primary}\n\
         辅助色调：{secondary}\n\
         字体风格：{typography}\n\
         布局风格：{layout}\n\
         装饰元素：{decorative}\n\
         整体美学：{aesthetic}\n\n\
         【配色统一性要求 - 必须严格遵守】\n\
         - 所有内容页必须使用上述主色调，不允许任何变体\n\
         - 总结页必须使用与内容页完全相同的主色调\n\
         - 封面页可以使用上述主色调或兼容配色（建议使用上述主色调）\n\
         - 违反此要求将导致帖子整体性被破坏",
        primary = guide.color_palette.primary,
        secondary = guide.color_palette.secondary.join("、"),
        typography = guide.typography_style,
        layout = guide.layout_style,
        decorative = guide.decorative_elements,
        aesthetic = guide.overall_aesthetic,
    )
}

/// Per-page constraint. Content and summary pages always take the guide's primary color.
pub(crate) fn page_constraint(
    page_type: PageType,
    guide: Option<&VisualGuide>,
    metadata: Option<&VisualMetadata>,
) -> Option<String> {
    if guide.is_none() && metadata.is_none() {
        return None;
    }
    let meta = |pick: fn(&VisualMetadata) -> Option<&String>| {
        metadata.and_then(pick).filter(|value| !value.trim().is_empty())
    };
    let follow_layout = guide.map(|guide| format!("遵循全局布局风格（{}）", guide.layout_style));

    let mut lines = Vec::new();
    match page_type {
        PageType::Content | PageType::Summary => {
            if let Some(guide) = guide {
                lines.push(format!(
                    "主色调：{}（全局统一主色调，必须严格遵守）",
                    guide.color_palette.primary
                ));
            }
        }
        PageType::Cover => match meta(|m| m.primary_color.as_ref()) {
            Some(color) => lines.push(format!("主色调：{}", color)),
            None => {
                if let Some(guide) = guide {
                    lines.push(format!(
                        "主色调：{}（遵循全局主色调）",
                        guide.color_palette.primary
                    ));
                }
            }
        },
    }
    if let Some(focus) = meta(|m| m.visual_focus.as_ref())
        .cloned()
        .or_else(|| follow_layout.clone())
    {
        lines.push(format!("视觉重点：{}", focus));
    }
    if let Some(pattern) = meta(|m| m.layout_pattern.as_ref())
        .cloned()
        .or_else(|| follow_layout.clone())
    {
        lines.push(format!("布局模式：{}", pattern));
    }
    if let Some(decorative) = meta(|m| m.decorative_style.as_ref())
        .cloned()
        .or_else(|| guide.map(|guide| guide.decorative_elements.clone()))
    {
        lines.push(format!("装饰风格：{}", decorative));
    }

    if lines.is_empty() {
        None
    } else {
        Some(format!("【当前页视觉约束】\n{}", lines.join("\n")))
    }
}

pub(crate) fn aesthetic_parameters(selection: &AestheticSelection) -> String {
    format!(
        "【动态美学参数】\n\
         - 推荐配色方案: {}\n\
         - 推荐布局风格: {}\n\
         - 材质效果: {}\n\
         - 光影效果: {}",
        selection.palette().summary(),
        selection.layout().summary(),
        selection.materials().join(", "),
        selection.lighting().join(", "),
    )
}

pub(crate) fn style_requirements(style_prompt: &str, aesthetics: &str) -> String {
    format!(
        "【风格要求 - 必须严格遵守】\n{}\n\n{}",
        style_prompt.trim(),
        aesthetics
    )
}

/// Suggestion block. `from_user` selects the user-priority label.
pub(crate) fn image_suggestion(suggestion: &str, from_user: bool) -> String {
    let label = if from_user {
        "【用户配图建议 - 高优先级】"
    } else {
        "【配图建议 - 高优先级】"
    };
    format!("{}\n{}", label, suggestion.trim())
}

pub(crate) fn technical_specs(head_image: bool, config: &ImageConfig) -> String {
    let ratio = format!(
        "- 竖版 {} 比例（{} 像素），超高清2K分辨率",
        config.aspect_ratio, config.resolution
    );
    let caveat = "- 重要：上述技术规格为图片生成参数说明，禁止将这些参数数值（如分辨率、像素数等）渲染为图片中的文字内容";
    if head_image {
        format!(
            "【技术规格 - 必须严格遵守】\n{ratio}\n\
             - 超高清画质，8K级细节，确保中文文字清晰可读\n\
             - 适合手机屏幕查看，特别优化小红书首图展示效果\n\
             - 所有文字内容必须完整呈现，字号适中易读\n\
             - 无水印、logo或品牌标识\n\
             - 正确的竖屏观看排版，不能旋转或倒置\n\
             - 构图饱满，视觉冲击力强，适合作为封面首图使用\n\
             {caveat}"
        )
    } else {
        format!(
            "【技术规格 - 必须严格遵守】\n{ratio}\n\
             - 超高清画质，确保中文文字清晰可读\n\
             - 适合手机屏幕查看\n\
             - 所有文字内容必须完整呈现\n\
             - 无水印、logo或品牌标识\n\
             - 正确的竖屏观看排版，不能旋转或倒置\n\
             {caveat}"
        )
    }
}

pub(crate) fn page_content(content: &str) -> String {
    format!("【页面内容】\n{}", content)
}

pub(crate) fn page_type_line(page_type: PageType, head_image: bool) -> String {
    let label = if head_image {
        "头图页"
    } else {
        page_type.label()
    };
    format!("【页面类型】{}", label)
}

/// Generic guidance, shortened when a style already sets the look.
pub(crate) fn design_guidance(has_style: bool) -> String {
    if has_style {
        "【设计指导】\n\
         - 文字清晰可读，字号适中，重要信息突出显示\n\
         - 排版美观，留白合理，支持 emoji 和符号"
            .to_string()
    } else {
        "【设计指导】\n\
         - 文字清晰可读，字号适中，重要信息突出显示\n\
         - 排版美观，留白合理，支持 emoji 和符号\n\
         - 背景简洁但不单调，可以有装饰性元素（如图标、插画）\n\
         - 保持专业感和视觉吸引力"
            .to_string()
    }
}

pub(crate) fn design_requirements(page_type: PageType, head_image: bool) -> String {
    if head_image {
        return "【头图设计要求】\n\
                - 标题占据主要位置，字号最大，突出主题\n\
                - 副标题居中或在标题下方，简洁有力\n\
                - 整体设计要有强烈的视觉吸引力和冲击力\n\
                - 背景丰富有层次，有明确的视觉焦点\n\
                - 配色和谐统一，符合主题氛围\n\
                - 确保在小红书信息流中能脱颖而出\n\
                - 构图均衡，避免元素拥挤\n\
                - 可以适当添加装饰性元素增强视觉效果"
            .to_string();
    }
    match page_type {
        PageType::Cover => "【封面页设计要求】\n\
                            - 标题占据主要位置，字号最大\n\
                            - 副标题居中或在标题下方\n\
                            - 整体设计要有吸引力和冲击力\n\
                            - 背景可以更丰富，有视觉焦点"
            .to_string(),
        PageType::Content | PageType::Summary => "【内容页设计要求】\n\
                                                  - 信息层次分明\n\
                                                  - 列表项清晰展示\n\
                                                  - 重点内容用颜色或粗体强调\n\
                                                  - 可以有小图标辅助说明"
            .to_string(),
    }
}

/// Consistency reminder. Covers without a style need none.
pub(crate) fn style_consistency(page_type: PageType, style_name: Option<&str>) -> Option<String> {
    match (page_type, style_name) {
        (PageType::Cover, Some(name)) => Some(format!(
            "【风格一致性要求】这是封面页，后续所有内容页必须严格遵守本页的风格设定（{}），保持整体风格统一。",
            name
        )),
        (_, Some(name)) => Some(format!(
            "【风格一致性要求】必须与封面页使用完全相同的风格（{}），确保所有页面风格统一。配色、布局、视觉元素都应保持一致。",
            name
        )),
        (PageType::Cover, None) => None,
        (_, None) => Some("【风格一致性要求】参考封面页的风格，保持所有页面风格统一。".to_string()),
    }
}

pub(crate) fn context_reference(topic: &str, full_outline: &str) -> String {
    format!(
        "【上下文参考】\n用户原始需求：{}\n完整内容大纲：\n---\n{}\n---",
        topic, full_outline
    )
}

pub(crate) fn head_image_requirements() -> String {
    "【头图模式要求】\n\
     - 提高生成质量，确保细节丰富\n\
     - 优化构图，增强视觉冲击力\n\
     - 适合作为小红书首图展示\n\
     - 突出主题，吸引用户点击"
        .to_string()
}

pub(crate) fn negative_suffix(negative_prompt: &str) -> String {
    format!("【禁止元素】{}", negative_prompt)
}

pub(crate) fn format_requirements(config: &ImageConfig) -> String {
    format!(
        "【格式要求】\n\
         - 严格使用 {} 比例（{} 像素，2K分辨率）\n\
         - 超高清画质，确保中文文字清晰可读\n\
         - 适合手机屏幕查看",
        config.aspect_ratio, config.resolution
    )
}
