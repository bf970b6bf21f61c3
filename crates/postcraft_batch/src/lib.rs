//! Batch planning and template-driven prompt generation.
//!
//! [`plan_prompt_batch`] bounds a user's theme and prompt lists to a fixed
//! number of independent tasks; [`plan_prompt_batch_with_config`] takes the
//! cap from `[batch] max_count`. [`TemplatePromptGenerator`] turns themes into
//! image prompts by sending a meta-prompt template plus the theme to a text model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod plan;
mod template;

pub use plan::{plan_prompt_batch, plan_prompt_batch_with_config};
pub use template::{TemplatePrompt, TemplatePromptGenerator};
