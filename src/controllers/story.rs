use axum::{extract::rejection::JsonRejection, extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::story::{StoryRequest, StoryResponse, StoryService, StoryServiceApi},
    error::AppResult,
};

pub struct StoryController {
    story_service: Arc<StoryService>,
}

impl StoryController {
    pub fn new(story_service: Arc<StoryService>) -> Self {
        Self { story_service }
    }

    /// POST /api/generate-story - Write a short story about an image
    ///
    /// An unreadable body is treated like one without `imageUrl`.
    pub async fn generate_story(
        State(controller): State<Arc<StoryController>>,
        payload: Result<Json<StoryRequest>, JsonRejection>,
    ) -> AppResult<Json<StoryResponse>> {
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                tracing::debug!(rejection = %rejection, "Unreadable story request body");
                StoryRequest::default()
            }
        };

        let story = controller
            .story_service
            .generate_story(request.image_url)
            .await?;

        Ok(Json(StoryResponse { story }))
    }
}
