//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that captures server-side errors to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, ApiError>`. Responses carry a JSON `{"message": ...}` body,
//! which is what both front-ends read.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::datastore::DataServiceError;

/// Application-level error type for the REST backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Data service operation failed.
    #[error("data service error: {0}")]
    DataService(#[from] DataServiceError),

    /// Bad request from client (missing/invalid fields).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Invalid credentials.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Unique-constraint conflict.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Internal(_) | Self::DataService(DataServiceError::Http(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let (status, message) = match self {
            Self::DataService(err) => data_service_response(err),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Conflict(message) => (StatusCode::CONFLICT, message),
            Self::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Map a raw data service failure to an HTTP status and message.
///
/// Routes usually classify not-found/conflict themselves (they know the
/// entity involved and the observed message for it); anything that reaches
/// this fallback is an unclassified backend failure with the underlying
/// message passed through when there is one.
fn data_service_response(err: DataServiceError) -> (StatusCode, String) {
    match err {
        DataServiceError::RowNotFound => {
            (StatusCode::NOT_FOUND, "Registro no encontrado.".to_string())
        }
        DataServiceError::UniqueViolation(message) => (StatusCode::CONFLICT, message),
        DataServiceError::Service { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        DataServiceError::Http(_) | DataServiceError::Decode(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error interno del servidor.".to_string(),
        ),
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            get_status(ApiError::BadRequest("x".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Unauthorized("x".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(ApiError::NotFound("x".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::Conflict("x".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(ApiError::Internal("x".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_data_service_errors_map_to_http_statuses() {
        assert_eq!(
            get_status(ApiError::DataService(DataServiceError::RowNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::DataService(DataServiceError::UniqueViolation(
                "duplicado".to_string()
            ))),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(ApiError::DataService(DataServiceError::Service {
                status: 500,
                message: "boom".to_string()
            })),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
