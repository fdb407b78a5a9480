use super::error::StoryServiceError;
use crate::infrastructure::repositories::StoryRepository;
use async_trait::async_trait;
use std::sync::Arc;

pub const STORY_PROMPT: &str =
    "Look at this image and create a short creative story about it (around 150-200 words).";

pub struct StoryService {
    story_repo: Arc<dyn StoryRepository>,
}

impl StoryService {
    pub fn new(story_repo: Arc<dyn StoryRepository>) -> Self {
        Self { story_repo }
    }
}

#[async_trait]
pub trait StoryServiceApi: Send + Sync {
    /// Generate a short story about the image at `image_url`
    ///
    /// A missing or empty URL is rejected before the provider is called.
    async fn generate_story(&self, image_url: Option<String>) -> Result<String, StoryServiceError>;
}

#[async_trait]
impl StoryServiceApi for StoryService {
    async fn generate_story(&self, image_url: Option<String>) -> Result<String, StoryServiceError> {
        let image_url = image_url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| StoryServiceError::Invalid("Image URL is required".to_string()))?;

        tracing::info!(image_url = %image_url, "Story generation request");

        self.story_repo
            .generate(STORY_PROMPT, &image_url)
            .await
            .map_err(StoryServiceError::Dependency)
    }
}
