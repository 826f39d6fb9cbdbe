//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Screen                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  await signIn(email, password)                                          │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │  Validation Error? ─── ValidationError::Required ────┐          │  │
//! │  │         │                                             │          │  │
//! │  │  Store Error? ──────── DbError::QueryFailed ─────────┤          │  │
//! │  │         │                                             ▼          │  │
//! │  │  Context Error? ────── CoreError::NotInitialized ── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  catch (e) {                                                            │
//! │    // e.code = "INVALID_CREDENTIALS"                                    │
//! │    // e.message = "Invalid email or password."                          │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::error;

use bistro_core::{CoreError, ValidationError};
use bistro_db::DbError;

/// Fallback shown when the store fails in a way the user can't act on.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// API error returned from storefront commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "EMPTY_CART",
///   "message": "Please add items to your cart before checkout."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// No account matches the email and password
    InvalidCredentials,

    /// A record with the same key already exists
    Duplicate,

    /// Checkout or payment attempted with nothing in the cart
    EmptyCart,

    /// Context used outside its provider
    ConfigurationError,

    /// Store operation failed
    DatabaseError,

    /// Internal server error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn invalid_credentials() -> Self {
        ApiError::new(ErrorCode::InvalidCredentials, "Invalid email or password.")
    }

    pub fn empty_cart() -> Self {
        ApiError::new(
            ErrorCode::EmptyCart,
            "Please add items to your cart before checkout.",
        )
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts store errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DbError::UniqueViolation { field, value } => ApiError::new(
                ErrorCode::Duplicate,
                format!("{} '{}' already exists", field, value),
            ),
            DbError::ConnectionFailed(e) => {
                error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed { message, code } => {
                // Log the actual error but return a generic message
                error!(code = ?code, "Database query failed: {}", message);
                ApiError::new(ErrorCode::DatabaseError, GENERIC_FAILURE)
            }
            DbError::Decode { entity, message } => {
                error!(entity = %entity, "Malformed record: {}", message);
                ApiError::new(ErrorCode::DatabaseError, GENERIC_FAILURE)
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            e @ (DbError::InvalidRecord(_) | DbError::InvalidFilter(_) | DbError::Internal(_)) => {
                error!("Internal database error: {}", e);
                ApiError::internal(GENERIC_FAILURE)
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotInitialized => {
                error!("{}", err);
                ApiError::new(ErrorCode::ConfigurationError, err.to_string())
            }
            CoreError::InvalidCart(_) => {
                error!("{}", err);
                ApiError::internal(GENERIC_FAILURE)
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
