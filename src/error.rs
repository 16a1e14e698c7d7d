/// Error types for draft-service
///
/// This module defines all error types that can occur in the service.
/// Errors are converted to the JSON envelopes the API contract defines.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

/// Result type for draft-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A request field is missing, mistyped, or out of its declared bounds.
    /// Carries the first violation found, never a list.
    #[error("{0}")]
    Validation(String),

    /// Required parallel arrays differ in length. Kept separate from
    /// `Validation` so callers can tell the two apart; the wire envelope
    /// is the same.
    #[error("{0}")]
    LengthMismatch(String),

    /// Unknown route
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure, reported without leaking internals
    #[error("{0}")]
    Internal(String),
}

/// Wire shape of every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl AppError {
    fn error_label(&self) -> &'static str {
        match self {
            AppError::Validation(_) | AppError::LengthMismatch(_) => "Validation Error",
            AppError::NotFound(_) => "Not Found",
            AppError::Internal(_) => "Internal Server Error",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::LengthMismatch(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.error_label(),
            message: self.to_string(),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_400() {
        let err = AppError::Validation("\"ids\" is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_label(), "Validation Error");
    }

    #[test]
    fn length_mismatch_shares_the_validation_envelope() {
        let err = AppError::LengthMismatch("arrays differ".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_label(), "Validation Error");
    }

    #[test]
    fn internal_errors_map_to_500() {
        let err = AppError::Internal("boom".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_label(), "Internal Server Error");
    }
}
