//! # HTTP Errors
//!
//! Maps query and source failures to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::film::MappingError;
use crate::query::QueryError;

/// Result type for HTTP handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by the film routes
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid query parameters
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Nothing is served at this path
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The node exists but is not a film container
    #[error("Resource '{path}' is not a film container")]
    NotAContainer { path: String },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// The container holds a node that is not a valid film
    #[error("{0}")]
    Mapping(#[from] MappingError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::NotAContainer { .. } => StatusCode::NOT_FOUND,
            ApiError::Mapping(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::from(QueryError::BlankParameterName).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("/content".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::NotAContainer {
                path: "/content".to_string()
            }
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(MappingError::MissingField("year")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_carries_message() {
        let err = ApiError::from(QueryError::NegativeBound {
            parameter: "limit",
        });
        let body = ErrorResponse::from(err);
        assert_eq!(body.code, 400);
        assert_eq!(body.error, "limit cannot be less than 0");
    }
}
