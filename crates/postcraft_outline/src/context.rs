//! Topic context shared by normalization and fallback filling.

/// What synthesized page text may reference: the topic and the chosen style name.
///
/// # Examples
///
/// ```
/// use postcraft_outline::TopicContext;
///
/// let context = TopicContext::new("秋季穿搭").with_style_name("INS 极简");
/// assert_eq!(context.style_hint(), "，并符合「INS 极简」风格要求");
/// assert_eq!(TopicContext::new("秋季穿搭").style_hint(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicContext {
    /// User topic
    pub topic: String,
    /// Display name of the resolved style
    pub style_name: Option<String>,
}

impl TopicContext {
    /// Context with no style.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            style_name: None,
        }
    }

    /// Attach a style name. Blank names are ignored.
    pub fn with_style_name(mut self, style_name: impl Into<String>) -> Self {
        let style_name = style_name.into();
        if !style_name.trim().is_empty() {
            self.style_name = Some(style_name);
        }
        self
    }

    /// `，并符合「name」风格要求` when a style is set, empty otherwise.
    pub fn style_hint(&self) -> String {
        self.style_name
            .as_deref()
            .map(|name| format!("，并符合「{}」风格要求", name))
            .unwrap_or_default()
    }

    /// `，符合「name」风格要求` suffix used by synthesized page suggestions.
    pub(crate) fn style_suffix(&self) -> String {
        self.style_name
            .as_deref()
            .map(|name| format!("，符合「{}」风格要求", name))
            .unwrap_or_default()
    }
}
