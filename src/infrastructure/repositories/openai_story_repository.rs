use super::story_repository::StoryRepository;
use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::{
        ChatCompletionRequestMessageContentPartImageArgs,
        ChatCompletionRequestMessageContentPartTextArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs, ImageUrlArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI chat completion implementation of the story repository
pub struct OpenAiStoryRepository {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiStoryRepository {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }

    /// Single user message: the prompt text followed by the image reference
    fn build_request(
        &self,
        prompt: &str,
        image_url: &str,
    ) -> Result<CreateChatCompletionRequest, OpenAIError> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(vec![
                ChatCompletionRequestMessageContentPartTextArgs::default()
                    .text(prompt)
                    .build()?
                    .into(),
                ChatCompletionRequestMessageContentPartImageArgs::default()
                    .image_url(ImageUrlArgs::default().url(image_url).build()?)
                    .build()?
                    .into(),
            ])
            .build()?;

        CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages([message.into()])
            .build()
    }
}

#[async_trait]
impl StoryRepository for OpenAiStoryRepository {
    async fn generate(&self, prompt: &str, image_url: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            image_url = image_url,
            "Calling OpenAI chat completion API"
        );

        let request = self
            .build_request(prompt, image_url)
            .map_err(|e| format!("Failed to build chat request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                "OpenAI chat completion call failed"
            );
            let message = e.to_string();
            if message.trim().is_empty() {
                "OpenAI chat completion error".to_string()
            } else {
                message
            }
        })?;

        let story = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or_else(|| "OpenAI returned no completion content".to_string())?;

        tracing::info!(
            provider = "openai",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            story_length = story.len(),
            "Story generation completed"
        );

        Ok(story)
    }
}
