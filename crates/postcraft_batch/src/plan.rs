//! Batch planning.

use postcraft_core::{BatchConfig, PromptBatchPlan, PromptBatchTask};
use tracing::debug;

/// Build a work list of at most `max_count` tasks.
///
/// Themes come first, then prompts fill whatever room remains. Entries are
/// trimmed and blank ones dropped before the cap applies.
///
/// # Examples
///
/// ```
/// use postcraft_batch::plan_prompt_batch;
///
/// let plan = plan_prompt_batch(&["咖啡", "  ", "露营"], &["a cat on a sofa"], 2);
/// assert_eq!(plan.total_count, 2);
/// assert_eq!(plan.tasks[1].theme.as_deref(), Some("露营"));
/// ```
pub fn plan_prompt_batch<T, P>(themes: &[T], prompts: &[P], max_count: usize) -> PromptBatchPlan
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    let mut tasks: Vec<PromptBatchTask> = non_blank(themes)
        .take(max_count)
        .enumerate()
        .map(|(index, theme)| PromptBatchTask {
            index,
            theme: Some(theme),
            prompt: None,
        })
        .collect();

    let room = max_count.saturating_sub(tasks.len());
    let offset = tasks.len();
    tasks.extend(
        non_blank(prompts)
            .take(room)
            .enumerate()
            .map(|(index, prompt)| PromptBatchTask {
                index: offset + index,
                theme: None,
                prompt: Some(prompt),
            }),
    );

    debug!(
        themes = themes.len(),
        prompts = prompts.len(),
        tasks = tasks.len(),
        max_count,
        "Planned prompt batch"
    );
    PromptBatchPlan {
        total_count: tasks.len(),
        tasks,
        max_count,
    }
}

/// Build a work list capped at the configured `max_count`.
///
/// # Examples
///
/// ```
/// use postcraft_batch::plan_prompt_batch_with_config;
/// use postcraft_core::BatchConfig;
///
/// let themes: Vec<String> = (0..15).map(|i| format!("主题{}", i)).collect();
/// let plan = plan_prompt_batch_with_config(&themes, &["unused"], &BatchConfig::default());
/// assert_eq!(plan.total_count, 10);
/// ```
pub fn plan_prompt_batch_with_config<T, P>(
    themes: &[T],
    prompts: &[P],
    config: &BatchConfig,
) -> PromptBatchPlan
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    plan_prompt_batch(themes, prompts, config.max_count)
}

fn non_blank<S: AsRef<str>>(items: &[S]) -> impl Iterator<Item = String> + '_ {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_fill_remaining_room() {
        let plan = plan_prompt_batch(&["a", "b"], &["p1", "p2", "p3"], 4);
        let indices: Vec<usize> = plan.tasks.iter().map(|t| t.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3]);
        assert_eq!(plan.tasks[2].prompt.as_deref(), Some("p1"));
        assert!(plan.tasks[3].theme.is_none());
    }

    #[test]
    fn test_zero_cap() {
        let plan = plan_prompt_batch(&["a"], &["p"], 0);
        assert!(plan.tasks.is_empty());
        assert_eq!(plan.max_count, 0);
    }
}
