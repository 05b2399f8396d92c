use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use storage::repository::StorageError;
use thiserror::Error;

/// API error taxonomy: validation → 400, not-found → 404, anything else →
/// 500 with a generic message. Every failure surfaces directly to the
/// caller; there are no retries.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Topic not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        // The real failure goes to the log; the wire gets a generic 500.
        tracing::error!(error = %err, "storage failure");
        ApiError::Internal
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_connection_failure_maps_to_500() {
        let err: ApiError = StorageError::Connection("refused".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn storage_serialization_failure_maps_to_500() {
        let err: ApiError = StorageError::Serialization("bad row".to_string()).into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }
}
