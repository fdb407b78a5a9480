use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{error}: {details}")]
    ExternalService { error: String, details: String },

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error body returned to clients: a short message, plus the underlying
/// cause for server-side failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl AppError {
    /// Provider failure; blank details are replaced so clients always get a cause
    pub fn external(error: impl Into<String>, details: impl Into<String>) -> Self {
        let details = details.into();
        let details = if details.trim().is_empty() {
            "Unknown provider error".to_string()
        } else {
            details
        };

        Self::ExternalService {
            error: error.into(),
            details,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ExternalService { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            Self::BadRequest(message) => ErrorResponse {
                error: message.clone(),
                details: None,
            },
            Self::ExternalService { error, details } => ErrorResponse {
                error: error.clone(),
                details: Some(details.clone()),
            },
            Self::Internal(details) => ErrorResponse {
                error: "Internal server error".to_string(),
                details: Some(details.clone()),
            },
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
