//! # Storage Error Types
//!
//! Error types for repository operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)      Poisoned Mutex (memory store)          │
//! │       │                                 │                               │
//! │       ▼                                 ▼                               │
//! │  DbError (this module) ← Same variants for both repository kinds        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PetService ← NotFound → 404 response, anything else → 500 response     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Storage operation errors.
///
/// Both repository implementations report through this type, so callers
/// never need to know which store is behind the trait.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found.
    ///
    /// ## When This Occurs
    /// - `fetch_optional` returns no row
    /// - UPDATE/DELETE affected zero rows
    /// - Id absent from the in-memory map
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A table constraint rejected the write.
    ///
    /// ## When This Occurs
    /// - Empty name (`CHECK (name <> '')`)
    /// - Status outside the allowed set
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - Pool is closed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal storage error.
    #[error("Internal storage error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Returns true if this is the "no such record" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DbError::NotFound { .. })
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// sqlx::Error::PoolClosed     → DbError::ConnectionFailed
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports "CHECK constraint failed: <expr>" and
                // "NOT NULL constraint failed: <table>.<column>"
                if msg.contains("constraint failed") {
                    DbError::ConstraintViolation(msg.to_string())
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for storage operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_distinguishable() {
        let err = DbError::not_found("Pet", 42);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Pet not found: 42");

        assert!(!DbError::PoolExhausted.is_not_found());
        assert!(!DbError::Internal("boom".to_string()).is_not_found());
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(err.is_not_found());

        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
    }
}
