use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum StoryServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("dependency error: {0}")]
    Dependency(String),
}

impl From<StoryServiceError> for AppError {
    fn from(err: StoryServiceError) -> Self {
        match err {
            StoryServiceError::Invalid(msg) => AppError::BadRequest(msg),
            StoryServiceError::Dependency(details) => {
                AppError::external("Failed to generate story", details)
            }
        }
    }
}
