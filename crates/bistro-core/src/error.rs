//! # Error Types
//!
//! Domain-specific error types for bistro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bistro-core errors (this file)                                        │
//! │  ├── CoreError        - Context used outside its provider              │
//! │  └── ValidationError  - Sign-in / sign-up / review input failures      │
//! │                                                                         │
//! │  bistro-db errors (separate crate)                                     │
//! │  └── DbError          - DataStore failures                             │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the screens see (serialized)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart, saved-item and session operations never fail: they trust their
//! callers. The only core failure is reaching for the context before a
//! provider has been established.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core state errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The shared context was read outside an established provider scope.
    ///
    /// ## When This Occurs
    /// - A screen asks a detached [`crate::ContextProvider`] for the cart
    /// - The provider was torn down before the screen was
    #[error("cart context not initialized: use within a ContextProvider")]
    NotInitialized,

    /// A deserialized cart breaks the one-line-per-id or quantity rule.
    #[error("invalid cart: {0}")]
    InvalidCart(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the [`crate::validation`] helpers before a flow reaches the
/// store. The messages are shown to the user verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("Please enter your {field}")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A star rating has not been picked yet.
    #[error("Please select a star rating before submitting your review.")]
    RatingRequired,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
