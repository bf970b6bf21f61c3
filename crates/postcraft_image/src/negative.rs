//! Negative prompt terms.

/// Terms every image prompt forbids.
pub const BASE_NEGATIVE_TERMS: [&str; 35] = [
    "watermark",
    "logo",
    "text overlay",
    "brand name",
    "low quality",
    "blurry",
    "distorted",
    "cropped",
    "horizontal layout",
    "landscape orientation",
    "upside down",
    "rotated",
    "Xiaohongshu logo",
    "user ID",
    "brand identifier",
    "artificial look",
    "plastic texture",
    "too perfect",
    "computer generated",
    "AI generated",
    "digital artifact",
    "smooth plastic appearance",
    "unnatural lighting",
    "perfectly symmetrical",
    "overprocessed",
    "pure yellow background",
    "amateur design",
    "messy text",
    "illegible characters",
    "distorted visuals",
    "monochrome",
    "flat lighting",
    "lack of depth",
    "no texture",
    "generic stock photo style",
];

/// Extra terms for head-image mode.
pub const HEAD_IMAGE_NEGATIVE_TERMS: [&str; 12] = [
    "simple background",
    "lack of detail",
    "dull colors",
    "low contrast",
    "poor composition",
    "unattractive",
    "boring",
    "flat design",
    "no visual hierarchy",
    "small text",
    "hard to read text",
    "cluttered layout",
];

/// Terms that contradict a given style. Empty for styles without a list.
pub fn style_negative_terms(style_id: &str) -> &'static [&'static str] {
    match style_id {
        "ins_minimal" => &[
            "cluttered",
            "busy background",
            "vibrant colors",
            "complex patterns",
            "excessive decorative elements",
            "warm tones",
            "colorful",
        ],
        "tech_future" => &[
            "warm tones",
            "natural lighting",
            "organic shapes",
            "soft colors",
            "pastel",
            "vintage look",
        ],
        "nature_fresh" => &[
            "artificial",
            "synthetic",
            "neon",
            "dark background",
            "urban",
            "industrial",
            "cold tones",
        ],
        "dopamine" => &[
            "muted colors",
            "dark background",
            "minimalist",
            "dull",
            "boring",
        ],
        "morandi" => &[
            "vibrant colors",
            "high contrast",
            "neon",
            "busy background",
            "cluttered",
        ],
        "black_gold" => &[
            "vibrant colors",
            "pastel",
            "natural lighting",
            "cluttered",
            "busy background",
        ],
        _ => &[],
    }
}

/// Comma-joined negative prompt: base terms, then style terms, then head-image terms.
///
/// # Examples
///
/// ```
/// use postcraft_image::negative_prompt;
///
/// let plain = negative_prompt(None, false);
/// assert!(plain.starts_with("watermark, logo"));
/// assert!(negative_prompt(Some("morandi"), false).contains("high contrast"));
/// assert!(negative_prompt(None, true).ends_with("cluttered layout"));
/// ```
pub fn negative_prompt(style_id: Option<&str>, head_image: bool) -> String {
    let style_terms = style_id.map(style_negative_terms).unwrap_or_default();
    let head_terms: &[&str] = if head_image {
        &HEAD_IMAGE_NEGATIVE_TERMS
    } else {
        &[]
    };
    BASE_NEGATIVE_TERMS
        .iter()
        .chain(style_terms)
        .chain(head_terms)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}
