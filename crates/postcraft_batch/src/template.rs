//! Template-driven image prompt generation.

use futures::future::try_join_all;
use postcraft_catalog::PromptTemplateCatalog;
use postcraft_core::{BatchConfig, TokenUsage};
use postcraft_error::{
    GenerationError, GenerationErrorKind, PostcraftResult, TemplateError, TemplateErrorKind,
};
use postcraft_interface::{TemplateSource, TextGenerator};
use tracing::{debug, error, info, instrument};

/// An image prompt generated for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePrompt {
    /// Theme the prompt was generated for
    pub theme: String,
    /// Generated image prompt, trimmed
    pub prompt: String,
    /// Token accounting
    pub usage: TokenUsage,
}

/// Expands themes into image prompts through a meta-prompt template and a text model.
pub struct TemplatePromptGenerator<T: TextGenerator, S: TemplateSource> {
    client: T,
    source: S,
    catalog: PromptTemplateCatalog,
    system_prompt: String,
}

impl<T: TextGenerator, S: TemplateSource> TemplatePromptGenerator<T, S> {
    /// Generator over the bundled template catalog with default batch settings.
    pub fn new(client: T, source: S) -> Self {
        Self {
            client,
            source,
            catalog: PromptTemplateCatalog::bundled(),
            system_prompt: BatchConfig::default().template_system_prompt,
        }
    }

    /// Use a specific template catalog.
    pub fn with_catalog(mut self, catalog: PromptTemplateCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use the system prompt from `config`.
    pub fn with_config(mut self, config: &BatchConfig) -> Self {
        self.system_prompt = config.template_system_prompt.clone();
        self
    }

    /// The wrapped text model.
    pub fn client(&self) -> &T {
        &self.client
    }

    /// Fetch the text of an enabled template.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown or disabled id, `LoadFailed` when the source fails.
    #[instrument(skip(self))]
    pub async fn load_template(&self, template_id: &str) -> PostcraftResult<String> {
        let Some(template) = self.catalog.get(template_id) else {
            return Err(TemplateError::new(TemplateErrorKind::NotFound(
                template_id.to_string(),
            ))
            .into());
        };
        let content = self.source.fetch(template.path()).await.map_err(|e| {
            error!(path = %template.path(), error = %e, "Template load failed");
            TemplateError::new(TemplateErrorKind::LoadFailed {
                path: template.path().clone(),
                reason: e.to_string(),
            })
        })?;
        debug!(template_id, len = content.len(), "Loaded prompt template");
        Ok(content)
    }

    /// Generate one image prompt for `theme`.
    ///
    /// # Errors
    ///
    /// Template errors, the text model's error, or `EmptyResponse` for blank output.
    #[instrument(skip(self))]
    pub async fn generate_prompt(
        &self,
        template_id: &str,
        theme: &str,
    ) -> PostcraftResult<TemplatePrompt> {
        let template = self.load_template(template_id).await?;
        self.expand(&template, theme).await
    }

    /// Generate prompts for every theme concurrently. The template is loaded once.
    ///
    /// Fails as a whole on the first failed theme.
    #[instrument(skip(self, themes), fields(count = themes.len()))]
    pub async fn generate_prompts<P: AsRef<str>>(
        &self,
        template_id: &str,
        themes: &[P],
    ) -> PostcraftResult<Vec<TemplatePrompt>> {
        let template = self.load_template(template_id).await?;
        let results = try_join_all(
            themes
                .iter()
                .map(|theme| self.expand(&template, theme.as_ref())),
        )
        .await?;
        info!(generated = results.len(), "Generated template prompts");
        Ok(results)
    }

    async fn expand(&self, template: &str, theme: &str) -> PostcraftResult<TemplatePrompt> {
        let prompt = format!(
            "{}\n\n【主题】\n{}\n\n请根据以上模板要求，为这个主题生成一个高质量的英文图像生成提示词（Prompt）。",
            template, theme
        );
        let response = self
            .client
            .generate_text(&prompt, &self.system_prompt)
            .await
            .inspect_err(|e| error!(theme, error = %e, "Template prompt generation failed"))?;

        let text = response.text.trim();
        if text.is_empty() {
            return Err(
                GenerationError::new(GenerationErrorKind::EmptyResponse(theme.to_string())).into(),
            );
        }
        debug!(theme, prompt_len = text.len(), "Generated template prompt");
        Ok(TemplatePrompt {
            theme: theme.to_string(),
            prompt: text.to_string(),
            usage: response.usage,
        })
    }
}
