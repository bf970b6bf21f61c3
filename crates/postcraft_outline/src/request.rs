//! Instruction text for the outline text model.
//!
//! The instruction fixes an output contract: a global visual guide first, then
//! one `<page>`-delimited section per page opening with a type tag, carrying a
//! visual metadata block, and ending with an image suggestion.

use postcraft_catalog::StylePresetCatalog;
use postcraft_core::OutlineConfig;
use postcraft_core::markers::{GUIDE_HEADER, METADATA_HEADER, PAGE_DELIMITER};
use tracing::{debug, instrument, warn};

/// A style that resolved in the catalog with non-empty prompt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Display name
    pub name: String,
    /// Effective prompt text
    pub prompt: String,
}

/// A ready-to-send outline request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRequest {
    /// User instruction
    pub prompt: String,
    /// System prompt
    pub system_prompt: String,
    /// Page count written into the instruction
    pub page_count: usize,
    /// Style embedded in the instruction, if any
    pub style: Option<ResolvedStyle>,
}

/// Builds the outline instruction for a topic, page count and optional style.
///
/// Never fails: an unknown style id drops the style block.
///
/// # Example
///
/// ```
/// use postcraft_catalog::StylePresetCatalog;
/// use postcraft_outline::OutlineRequestBuilder;
///
/// let styles = StylePresetCatalog::bundled();
/// let builder = OutlineRequestBuilder::new(&styles);
///
/// let request = builder.build("秋季穿搭", Some(3), Some("ins_minimal"));
/// assert_eq!(request.page_count, 3);
/// assert!(request.prompt.contains("「INS 极简」"));
///
/// let plain = builder.build("秋季穿搭", Some(3), Some("unknown"));
/// assert!(plain.style.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct OutlineRequestBuilder<'a> {
    styles: &'a StylePresetCatalog,
    default_page_count: usize,
    system_prompt: String,
}

impl<'a> OutlineRequestBuilder<'a> {
    /// Builder with default outline settings.
    pub fn new(styles: &'a StylePresetCatalog) -> Self {
        Self::with_config(styles, &OutlineConfig::default())
    }

    /// Builder using the page count default and system prompt from `config`.
    pub fn with_config(styles: &'a StylePresetCatalog, config: &OutlineConfig) -> Self {
        Self {
            styles,
            default_page_count: config.default_page_count.max(1),
            system_prompt: config.system_prompt.clone(),
        }
    }

    /// Resolve a style id to its name and effective prompt.
    pub fn resolve_style(&self, style_id: Option<&str>) -> Option<ResolvedStyle> {
        let style_id = style_id?;
        let Some(config) = self.styles.config(style_id) else {
            warn!(style_id, "Unknown style id, omitting style block");
            return None;
        };
        let prompt = config.effective_prompt().trim();
        if prompt.is_empty() {
            warn!(style_id, "Style prompt is empty, omitting style block");
            return None;
        }
        Some(ResolvedStyle {
            name: config.name().clone(),
            prompt: prompt.to_string(),
        })
    }

    /// Build the instruction. `None` or zero target uses the configured default count.
    #[instrument(skip(self, topic), fields(topic_len = topic.len()))]
    pub fn build(
        &self,
        topic: &str,
        target_page_count: Option<usize>,
        style_id: Option<&str>,
    ) -> OutlineRequest {
        let page_count = target_page_count
            .filter(|count| *count > 0)
            .unwrap_or(self.default_page_count);
        let style = self.resolve_style(style_id);

        let mut prompt = String::new();
        prompt.push_str(&intro(topic));
        if let Some(style) = &style {
            prompt.push_str(&style_block(style));
        }
        prompt.push_str(&hard_rules(page_count));
        prompt.push_str(&visual_rules());
        prompt.push_str(&output_format());
        if page_count == 1 {
            prompt.push_str(&head_image_rules());
            prompt.push_str(&single_page_example());
        } else {
            prompt.push_str(&multi_page_example());
        }
        prompt.push_str(&closing_checklist(page_count, style.as_ref()));

        debug!(
            page_count,
            style = style.as_ref().map(|s| s.name.as_str()),
            prompt_len = prompt.len(),
            "Built outline request"
        );

        OutlineRequest {
            prompt,
            system_prompt: self.system_prompt.clone(),
            page_count,
            style,
        }
    }
}

fn intro(topic: &str) -> String {
    format!(
        "你是一个严格按照指令执行的小红书内容创作专家。用户会给你一个要求以及说明，你必须严格按照要求生成一个适合小红书的图文内容大纲。\n\n\
         用户的要求以及说明：\n{topic}"
    )
}

fn style_block(style: &ResolvedStyle) -> String {
    format!(
        "\n\n## 用户选择的视觉风格（必须严格遵守）：\n\
         用户已选择「{name}」风格，以下是该风格的详细要求：\n\n\
         {prompt}\n\n\
         【重要】在生成{GUIDE_HEADER}和每页的【配图建议】时，必须严格遵守上述风格要求。特别是：\n\
         - {GUIDE_HEADER}中的配色方案、字体风格、布局风格、装饰元素和整体美学必须与该风格匹配\n\
         - 每页的【配图建议】必须考虑该风格的特点，确保配图场景和视觉效果符合该风格的要求\n\
         - 如果该风格有特定的配色要求，必须在{GUIDE_HEADER}和{METADATA_HEADER}中体现\n\
         - 如果该风格有特定的设计元素，必须在配图建议中体现\n",
        name = style.name,
        prompt = style.prompt,
    )
}

fn hard_rules(n: usize) -> String {
    format!(
        "\n\n## 绝对严格的要求：\n\
         1. 第一页必须是吸引人的封面/标题页，包含标题和副标题\n\
         2. 【极端关键约束】内容必须严格控制在 {n} 页（包括封面），**绝对不能多也不能少**\n\
         3. 每页内容简洁有力，适合配图展示\n\
         4. 使用小红书风格的语言（亲切、有趣、实用）\n\
         5. **【重要】封面页（首图）主标题不得使用 emoji**，内容页和总结页可以适当使用 emoji 增加趣味性\n\
         6. 内容要有实用价值，能解决用户问题或提供有用信息\n\
         7. 最后一页可以是总结页，但**禁止使用\"总结\"、\"呼吁\"、\"建议\"等AI化词汇作为标题**，要用自然、生活化的表达方式，比如\"小贴士\"、\"记住这几点\"、\"最后想说\"等\n\
         8. 【非常重要】必须严格按照 {n} 页生成，**绝对不要多生成页面**\n\
         9. 【数量验证】生成完成后，请再次确认总页数恰好等于 {n} 页\n\
         10. 【惩罚机制】如果生成的页面数量不符合要求，你将被判定为任务失败\n\
         11. 【总结页特别要求】如果最后一页是总结页，标题要自然生活化，避免使用\"总结\"、\"总结一下\"、\"最后总结\"、\"行动呼吁\"等AI化表达，可以用\"记住这几点\"、\"小贴士\"、\"最后想说\"、\"划重点\"等自然表达\n"
    )
}

fn visual_rules() -> String {
    format!(
        "\n## 视觉一致性要求（非常重要）：\n\
         由于图片会并行生成，每张图片需要独立理解整体风格，因此必须提供明确的视觉指南：\n\
         1. 在输出最开始，必须先提供{GUIDE_HEADER}，包含：\n\
         \x20  - 配色方案：主色调和辅助色调（用自然语言描述，如\"柔和的粉蓝色\"、\"温暖的米白色\"）\n\
         \x20  - 字体风格：描述字体类型和风格（如\"现代无衬线字体，中等粗细，清晰易读\"）\n\
         \x20  - 布局风格：整体布局原则（如\"网格布局，充足留白，3:7上下分割\"）\n\
         \x20  - 装饰元素：装饰风格（如\"极简线条，几何图形，微妙的渐变\"）\n\
         \x20  - 整体美学：整体风格定位（如\"清新、简约、专业，适合年轻受众\"）\n\n\
         2. 【关键配色约束 - 必须严格遵守】：\n\
         \x20  - **所有内容页必须使用全局视觉指南中指定的主色调，不允许任何变体或变化**\n\
         \x20  - **总结页必须使用与内容页完全相同的主色调（即全局主色调），不允许变体**\n\
         \x20  - 封面页可以使用全局主色调，或使用与全局主色调兼容的配色（建议优先使用全局主色调）\n\
         \x20  - 禁止为不同的内容页分配不同的主色调，这会导致帖子整体性被破坏\n\n\
         3. 每页必须包含{METADATA_HEADER}部分，描述该页的视觉特征：\n\
         \x20  - **主色调**（内容页和总结页必须严格使用全局主色调，封面页可以使用全局主色调或兼容配色）\n\
         \x20  - 视觉重点：该页的视觉重点布局（如\"顶部大标题，底部留白\"）\n\
         \x20  - 布局模式：该页的具体布局方式（如\"上下分割，标题占30%\"）\n\
         \x20  - 装饰风格：该页的装饰风格（应与全局装饰元素风格一致）\n\n\
         4. **【配图建议要求 - 非常重要】**：\n\
         \x20  - 每页内容末尾必须包含\"配图建议：\"，描述该页适合的配图场景（这是必需的，不能省略）\n\
         \x20  - 如果用户选择了特定风格，配图建议必须考虑该风格的特点\n\
         \x20  - 配图建议应该包含：场景描述、视觉元素、配色参考（如果有特定要求）、构图建议\n\
         \x20  - 配图建议要具体、可执行，便于后续图片生成时应用\n"
    )
}

fn output_format() -> String {
    format!(
        "\n## 输出格式（必须严格遵守，否则任务失败）：\n\
         - **输出顺序**：首先输出{GUIDE_HEADER}，然后才是各页面内容\n\
         - 必须使用 {PAGE_DELIMITER} 标签作为每一页的分隔符（这是强制分隔符，必须在每一页前使用）\n\
         - 每页第一行必须是页面类型标记，只能是 [封面]、[内容] 或 [总结] 中的一个\n\
         - 每页必须包含{METADATA_HEADER}部分（在页面类型标记之后，具体内容之前）\n\
         - 页面内容要具体、详细，方便后续生成图片\n\
         - 每页内容末尾必须包含\"配图建议：\"，描述该页适合的配图场景（这是必需的，不能省略）\n\
         - **配图建议必须与用户选择的风格匹配**（如果用户选择了特定风格）\n\
         - 避免在内容中使用 | 竖线符号（会与 markdown 表格冲突）\n\
         - 不要在输出中添加任何多余的内容或说明\n"
    )
}

fn head_image_rules() -> String {
    "\n## 头图模式特别要求（本次只生成 1 页）：\n\
     - 只生成一个封面页，不要生成任何内容页或总结页\n\
     - 封面页必须包含完整的标题和副标题\n\
     - 封面页的内容要简洁有力，适合作为小红书的头图\n\
     - 配图建议要适合头图使用场景，并符合用户选择的风格（如果有）\n"
        .to_string()
}

fn example_guide() -> String {
    format!(
        "{GUIDE_HEADER}\n\
         配色方案：主色调 - 温暖的咖啡棕色，辅助色 - 米白色、浅灰色、淡金色\n\
         字体风格：现代无衬线字体，中等粗细，清晰易读\n\
         布局风格：简洁布局，充足留白，上下分割结构\n\
         装饰元素：极简线条，温暖色调的几何图形，微妙的渐变\n\
         整体美学：温馨、舒适、专业，适合生活分享场景\n"
    )
}

fn example_cover() -> String {
    format!(
        "{PAGE_DELIMITER}\n\
         [封面]\n\
         {METADATA_HEADER}\n\
         - 主色调：温暖的咖啡棕色\n\
         - 视觉重点：顶部大标题，中间配图区域，底部留白\n\
         - 布局模式：上下分割，标题占30%，配图占50%，留白占20%\n\
         - 装饰风格：极简线条，温暖色调的几何图形\n\n\
         标题：5分钟学会手冲咖啡\n\
         副标题：新手也能做出咖啡店的味道\n\
         背景：温馨的咖啡场景，一个家庭布局的咖啡角\n\n\
         配图建议：温馨的咖啡角场景，摆放整齐的咖啡器具\n"
    )
}

fn single_page_example() -> String {
    format!(
        "\n## 示例输出（1 页）：\n\n{}\n{}",
        example_guide(),
        example_cover()
    )
}

fn multi_page_example() -> String {
    format!(
        "\n## 示例输出（3 页）：\n\n{guide}\n{cover}\n\
         {PAGE_DELIMITER}\n\
         [内容]\n\
         {METADATA_HEADER}\n\
         - 主色调：温暖的咖啡棕色（与全局一致）\n\
         - 视觉重点：左侧内容列表，右侧留白或小配图\n\
         - 布局模式：左右分割，内容占70%，留白占30%\n\
         - 装饰风格：极简线条，温暖色调的几何图形\n\n\
         第一步：准备器具\n\n\
         必备工具：\n\
         • 手冲壶（细嘴壶）\n\
         • 滤杯和滤纸\n\
         • 咖啡豆 15g\n\
         • 热水 250ml（92-96℃）\n\n\
         配图建议：整齐摆放的咖啡器具\n\n\
         {PAGE_DELIMITER}\n\
         [总结]\n\
         {METADATA_HEADER}\n\
         - 主色调：温暖的咖啡棕色（与全局一致）\n\
         - 视觉重点：上方标题，中间要点列表\n\
         - 布局模式：上下分割，标题占20%，要点占80%\n\
         - 装饰风格：极简线条，温暖色调的几何图形\n\n\
         记住这几点☕\n\
         • 豆子现磨现冲\n\
         • 水温控制在92-96℃\n\n\
         配图建议：冲好的手冲咖啡与散落的咖啡豆\n",
        guide = example_guide(),
        cover = example_cover(),
    )
}

fn closing_checklist(n: usize, style: Option<&ResolvedStyle>) -> String {
    let guide_style_note = style
        .map(|s| {
            format!(
                "\n   **特别重要**：用户选择了「{}」风格，{GUIDE_HEADER}必须与该风格的要求匹配，包括配色、字体、布局、装饰元素等所有方面。",
                s.name
            )
        })
        .unwrap_or_default();
    let suggestion_style_note = style
        .map(|s| {
            format!(
                "\n   **特别重要**：每页的配图建议必须考虑「{}」风格的特点，确保配图场景、视觉元素、配色等与该风格匹配。",
                s.name
            )
        })
        .unwrap_or_default();
    let page_type_check = if n == 1 {
        "【头图模式检查】本次只生成一个封面页，不要有任何其他页面"
    } else {
        "【页面类型检查】第一页为 [封面]，其余页面为 [内容] 或 [总结]，只能有一个 [封面]"
    };

    format!(
        "\n### 最后\n\
         现在，请根据用户的主题生成大纲。记住：\n\
         1. **首先输出{GUIDE_HEADER}**，定义统一的配色、字体、布局、装饰和整体美学{guide_style_note}\n\
         2. 严格使用 {PAGE_DELIMITER} 标签分割每一页\n\
         3. 每页开头标注类型：[封面]、[内容]、[总结]\n\
         4. **每页必须包含{METADATA_HEADER}**，描述该页的视觉特征（与全局指南保持一致）\n\
         5. **【配色统一性】所有内容页和总结页必须使用全局视觉指南中指定的主色调，不允许任何变体**\n\
         6. **【封面标题要求】封面页（首图）主标题不得使用 emoji，保持简洁专业**\n\
         7. 内容要详细、具体、专业、有价值\n\
         8. 适合制作成小红书图文\n\
         9. 每页末尾必须包含\"配图建议：\"描述配图场景{suggestion_style_note}\n\
         10. 避免使用竖线符号 | （会与 markdown 表格冲突）\n\
         11. 【极端关键】必须生成恰好 {n} 页，不能多也不能少\n\
         12. 【数量检查】在开始生成前，请先规划好这 {n} 页的内容结构，确保最终输出恰好 {n} 页\n\
         13. {page_type_check}\n\
         14. 【视觉一致性】确保所有页面的视觉元数据与全局视觉指南保持一致，这样可以保证并行生成的图片风格统一\n\n\
         【特别的！！注意】直接给出大纲内容（不要有任何多余的说明，也就是你直接从{GUIDE_HEADER}开始，不要有针对用户的回应对话），请输出："
    )
}
