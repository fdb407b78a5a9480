use serde::{Deserialize, Serialize};

/// Request for POST /api/generate-story
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoryRequest {
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoryResponse {
    pub story: String,
}
