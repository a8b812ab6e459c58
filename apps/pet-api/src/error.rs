//! # API Error Type
//!
//! The error body every non-2xx response carries.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Pet API                            │
//! │                                                                         │
//! │  AuthError ───────────────────────────────────────────► 401             │
//! │  Extractor rejection (bad JSON, bad id, bad status) ──► 400             │
//! │  ValidationError ─────────────────────────────────────► 400             │
//! │  DbError::NotFound ───────────────────────────────────► 404             │
//! │  any other DbError (logged, generic message) ─────────► 500             │
//! │                                                                         │
//! │  Body: { "code": 404, "message": "pet not found" }                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use petstore_core::ValidationError;
use serde::{Deserialize, Serialize};

use crate::auth::AuthError;

/// Error body returned to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("[{code}] {message}")]
pub struct ApiError {
    /// HTTP status code, repeated in the body
    pub code: u16,

    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    /// 400 Bad Request.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::BAD_REQUEST, message)
    }

    /// 401 Unauthorized.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::UNAUTHORIZED, message)
    }

    /// 404 Not Found.
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 Internal Server Error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// The HTTP status this error is sent with.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::bad_request(err.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Internal(e) => {
                tracing::error!("Identity provider failure: {}", e);
                ApiError::unauthorized("Unable to verify token")
            }
            other => ApiError::unauthorized(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_code() {
        assert_eq!(ApiError::bad_request("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::internal("x").code, 500);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err: ApiError = ValidationError::required("name").into();
        assert_eq!(err, ApiError::bad_request("name is required"));
    }

    #[test]
    fn test_auth_error_is_unauthorized() {
        let err: ApiError = AuthError::MissingHeader.into();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

        let err: ApiError = AuthError::Internal("key store offline".to_string()).into();
        assert_eq!(err.code, 401);
        assert!(!err.message.contains("offline"));
    }
}
