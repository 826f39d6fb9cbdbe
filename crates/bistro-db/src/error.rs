//! # Database Error Types
//!
//! Error types for DataStore operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)      JSON body (serde_json::Error)         │
//! │       │                                │                                │
//! │       └───────────────┬────────────────┘                                │
//! │                       ▼                                                 │
//! │  DbError (this module) ← message + optional backend code               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (storefront) ← Serialized for the screens                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// DataStore operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Record not found.
    ///
    /// ## When This Occurs
    /// - Dish details for an id the catalog does not have
    /// - Category lookup by a stale id
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a record with an id already used in its collection
    /// - Storing a second user with the same email (unique index)
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// A stored body did not match the expected record shape.
    #[error("Malformed {entity} record: {message}")]
    Decode { entity: String, message: String },

    /// Record passed to insert was not a JSON object.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Filter field is not a plain identifier.
    #[error("Invalid filter field: '{0}'")]
    InvalidFilter(String),

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created
    /// - File permissions issue
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed; carries the SQLite code when there is one.
    #[error("Query failed: {message}")]
    QueryFailed {
        message: String,
        code: Option<String>,
    },

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
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

    /// Creates a UniqueViolation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn decode(entity: impl Into<String>, err: serde_json::Error) -> Self {
        DbError::Decode {
            entity: entity.into(),
            message: err.to_string(),
        }
    }

    /// The backend's error code, when it gave one.
    pub fn code(&self) -> Option<&str> {
        match self {
            DbError::NotFound { .. } => Some("NOT_FOUND"),
            DbError::UniqueViolation { .. } => Some("UNIQUE_VIOLATION"),
            DbError::QueryFailed { code, .. } => code.as_deref(),
            DbError::PoolExhausted => Some("POOL_EXHAUSTED"),
            _ => None,
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → UNIQUE/PRIMARY KEY → UniqueViolation, else QueryFailed
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // "UNIQUE constraint failed: records.collection, records.id"
                if let Some(fields) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    DbError::UniqueViolation {
                        field: fields.to_string(),
                        value: "unknown".to_string(),
                    }
                } else {
                    DbError::QueryFailed {
                        message: msg.to_string(),
                        code: db_err.code().map(|c| c.into_owned()),
                    }
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

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(DbError::not_found("Food", 4).code(), Some("NOT_FOUND"));
        assert_eq!(DbError::duplicate("email", "a@b.c").code(), Some("UNIQUE_VIOLATION"));
        assert_eq!(DbError::InvalidFilter("x y".into()).code(), None);

        let err = DbError::QueryFailed {
            message: "boom".into(),
            code: Some("1".into()),
        };
        assert_eq!(err.code(), Some("1"));
    }

    #[test]
    fn test_not_found_message() {
        assert_eq!(DbError::not_found("Food", 42).to_string(), "Food not found: 42");
    }
}
