//! Image generation against an injected image model.

use crate::sections;
use crate::{AssembledPrompt, ImagePromptAssembler, PageImageRequest};
use postcraft_core::{ImageOptions, ResponseFormat, TokenUsage};
use postcraft_error::{GenerationError, GenerationErrorKind, PostcraftResult};
use postcraft_interface::ImageGenerator;
use tracing::{debug, error, info, instrument};

/// Image data returned by a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    /// Base64 payload or URL
    pub image_data: String,
    /// Token accounting
    pub usage: TokenUsage,
}

/// Generates page images and free-prompt images.
pub struct PageImageGenerator<G: ImageGenerator> {
    client: G,
    assembler: ImagePromptAssembler,
}

impl<G: ImageGenerator> PageImageGenerator<G> {
    /// Generator over an image model and a prompt assembler.
    pub fn new(client: G, assembler: ImagePromptAssembler) -> Self {
        Self { client, assembler }
    }

    /// The wrapped image model.
    pub fn client(&self) -> &G {
        &self.client
    }

    /// The prompt assembler.
    pub fn assembler(&self) -> &ImagePromptAssembler {
        &self.assembler
    }

    /// Assemble the page prompt and generate its image.
    ///
    /// # Errors
    ///
    /// Returns the image model's error, or `NoImageData` when the model answers without an image.
    #[instrument(
        skip(self, request),
        fields(page_index = *request.page_index(), page_type = %request.page_type())
    )]
    pub async fn generate_page_image(
        &self,
        request: &PageImageRequest,
    ) -> PostcraftResult<GeneratedImage> {
        let assembled: AssembledPrompt = self.assembler.assemble(request);
        debug!(
            head_image = assembled.head_image,
            temperature = assembled.temperature,
            "Generating page image"
        );
        self.dispatch(&assembled.full_prompt(), assembled.temperature)
            .await
    }

    /// Generate an image straight from a prompt, with the format block appended.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPrompt` for a blank prompt without calling the model.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate_image_from_prompt(
        &self,
        prompt: &str,
    ) -> PostcraftResult<GeneratedImage> {
        if prompt.trim().is_empty() {
            Err(GenerationError::new(GenerationErrorKind::EmptyPrompt))?
        }
        let config = self.assembler.config();
        let full_prompt = format!("{}\n\n{}", prompt, sections::format_requirements(config));
        self.dispatch(&full_prompt, config.prompt_image_temperature)
            .await
    }

    async fn dispatch(&self, prompt: &str, temperature: f32) -> PostcraftResult<GeneratedImage> {
        let options = ImageOptions {
            model: self.assembler.config().model.clone(),
            temperature,
            response_format: ResponseFormat::Image,
        };
        let result = self.client.generate_image(prompt, &[], &options).await?;

        let Some(image_data) = result.image_data.filter(|data| !data.is_empty()) else {
            error!(model = %options.model, "Image model returned no image data");
            return Err(GenerationError::new(GenerationErrorKind::NoImageData).into());
        };
        info!(total_tokens = result.usage.total_tokens, "Image generated");
        Ok(GeneratedImage {
            image_data,
            usage: result.usage,
        })
    }
}
