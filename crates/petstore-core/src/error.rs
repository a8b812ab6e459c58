//! # Error Types
//!
//! Domain-specific error types for petstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  petstore-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures       → 400           │
//! │                                                                         │
//! │  petstore-db errors (separate crate)                                    │
//! │  └── DbError          - NotFound → 404, everything else → 500           │
//! │                                                                         │
//! │  pet-api errors (in app)                                                │
//! │  ├── AuthError        - Missing/invalid bearer token    → 401           │
//! │  └── ApiError         - What the HTTP client sees                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when request input doesn't meet requirements.
/// They are raised before any storage call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

impl ValidationError {
    /// Creates a Required error for the given field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");

        let err = ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: vec!["available".to_string(), "sold".to_string()],
        };
        assert_eq!(
            err.to_string(),
            r#"status must be one of: ["available", "sold"]"#
        );
    }
}
