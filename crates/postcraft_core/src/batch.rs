//! Bounded batch work lists.

use serde::{Deserialize, Serialize};

/// One unit of batch work: a theme to expand, a ready prompt, or both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptBatchTask {
    /// Position within the plan
    pub index: usize,
    /// Theme to expand through a prompt template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Ready-to-use image prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

/// Work list capped at `max_count` tasks.
///
/// # Examples
///
/// ```
/// use postcraft_core::{PromptBatchPlan, PromptBatchTask};
///
/// let plan = PromptBatchPlan {
///     tasks: vec![PromptBatchTask { index: 0, theme: Some("咖啡".into()), prompt: None }],
///     total_count: 1,
///     max_count: 10,
/// };
/// assert!(plan.total_count <= plan.max_count);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptBatchPlan {
    /// Tasks in dispatch order
    pub tasks: Vec<PromptBatchTask>,
    /// Number of tasks
    pub total_count: usize,
    /// Cap the plan was built with
    pub max_count: usize,
}
