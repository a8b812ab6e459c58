//! # Validation Module
//!
//! Input validation for pet store requests.
//!
//! ## Validation Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extraction (axum)                                       │
//! │  └── JSON shape, integer path ids, status enum                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: PetService                                                   │
//! │  └── THIS MODULE: name required, id positive                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK(name <> '')                                      │
//! │  └── CHECK(status IN (...))                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a pet name.
///
/// The only rule is that the name is not empty. Whitespace-only and long
/// names are accepted as sent.
///
/// ## Example
/// ```rust
/// use petstore_core::validation::validate_pet_name;
///
/// assert!(validate_pet_name("Rex").is_ok());
/// assert!(validate_pet_name("   ").is_ok());
/// assert!(validate_pet_name("").is_err());
/// ```
pub fn validate_pet_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::required("name"));
    }
    Ok(())
}

/// Validates a pet id taken from a request path.
///
/// Stores only ever assign positive ids.
pub fn validate_pet_id(id: i64) -> ValidationResult<()> {
    if id <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "petId".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pet_name() {
        assert!(validate_pet_name("Rex").is_ok());
        assert!(validate_pet_name("Mr. Whiskers III").is_ok());

        assert_eq!(
            validate_pet_name("").unwrap_err(),
            ValidationError::required("name")
        );
        assert!(validate_pet_name(" \t ").is_ok());
        assert!(validate_pet_name(&"A".repeat(201)).is_ok());
        assert!(validate_pet_name(&"A".repeat(10_000)).is_ok());
    }

    #[test]
    fn test_validate_pet_id() {
        assert!(validate_pet_id(1).is_ok());
        assert!(validate_pet_id(i64::MAX).is_ok());
        assert!(validate_pet_id(0).is_err());
        assert!(validate_pet_id(-5).is_err());
    }
}
