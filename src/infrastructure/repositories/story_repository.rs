use async_trait::async_trait;

/// Repository for vision-capable text generation.
#[async_trait]
pub trait StoryRepository: Send + Sync {
    /// Ask the model to respond to `prompt` while looking at the image at
    /// `image_url`, returning the first completion's text.
    async fn generate(&self, prompt: &str, image_url: &str) -> Result<String, String>;
}
