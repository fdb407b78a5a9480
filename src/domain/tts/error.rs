use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::Dependency(details) => {
                AppError::external("Failed to generate speech", details)
            }
        }
    }
}
