pub mod dto;
pub mod error;
pub mod service;

pub use dto::{StoryRequest, StoryResponse};
pub use error::StoryServiceError;
pub use service::{StoryService, StoryServiceApi, STORY_PROMPT};
