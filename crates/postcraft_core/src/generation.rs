//! Request and response types for the external generation calls.

use serde::{Deserialize, Serialize};

/// Token accounting reported by a generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u64,
    /// Tokens in the candidates
    pub candidates_tokens: u64,
    /// Total tokens billed
    pub total_tokens: u64,
}

impl TokenUsage {
    /// Sum two usage reports.
    pub fn combine(self, other: TokenUsage) -> TokenUsage {
        TokenUsage {
            prompt_tokens: self.prompt_tokens + other.prompt_tokens,
            candidates_tokens: self.candidates_tokens + other.candidates_tokens,
            total_tokens: self.total_tokens + other.total_tokens,
        }
    }
}

/// Text model response.
///
/// # Examples
///
/// ```
/// use postcraft_core::{TextGeneration, TokenUsage};
///
/// let response = TextGeneration {
///     text: "【全局视觉指南】".to_string(),
///     usage: TokenUsage::default(),
/// };
/// assert_eq!(response.usage.total_tokens, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextGeneration {
    /// Generated text
    pub text: String,
    /// Token accounting
    pub usage: TokenUsage,
}

/// Inline reference image passed to the image model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceImage {
    /// MIME type, such as `image/png`
    pub mime_type: String,
    /// Base64 payload
    pub data: String,
}

/// What the generation call should return.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Plain text
    #[display("text")]
    Text,
    /// Image payload
    #[default]
    #[display("image")]
    Image,
}

/// Options for one image generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageOptions {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Requested response format
    pub response_format: ResponseFormat,
}

/// Image model response. Missing `image_data` is a generation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGeneration {
    /// Base64 payload or URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
    /// Token accounting
    pub usage: TokenUsage,
}
