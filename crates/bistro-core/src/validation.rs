//! # Validation Module
//!
//! Input checks run by the storefront flows before they reach the store.
//!
//! ## Where Each Check Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Sign in   ── validate_email ── validate_password(.., None)            │
//! │  Sign up   ── validate_full_name ── validate_email                     │
//! │               └── validate_password(.., Some(MIN_PASSWORD_LEN))        │
//! │  Review    ── validate_rating                                          │
//! │                                                                         │
//! │  Cart operations never validate: they trust their callers.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Inputs are trimmed before the emptiness check; the messages are shown
//! to the user as-is.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Shortest password accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

fn required(value: &str, field: &str) -> ValidationResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Requires a non-blank email. Returns it trimmed.
///
/// No format check is made; the store decides whether it matches anyone.
pub fn validate_email(email: &str) -> ValidationResult<String> {
    required(email, "email")
}

/// Requires a non-blank full name. Returns it trimmed.
pub fn validate_full_name(name: &str) -> ValidationResult<String> {
    required(name, "full name")
}

/// Requires a non-blank password, and at least `min_len` characters if given.
///
/// ## Example
/// ```rust
/// use bistro_core::validation::{validate_password, MIN_PASSWORD_LEN};
///
/// assert!(validate_password("abc", None).is_ok());
/// assert!(validate_password("abc", Some(MIN_PASSWORD_LEN)).is_err());
/// assert!(validate_password("   ", None).is_err());
/// ```
pub fn validate_password(password: &str, min_len: Option<usize>) -> ValidationResult<()> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }

    if let Some(min) = min_len {
        if password.chars().count() < min {
            return Err(ValidationError::TooShort {
                field: "Password".to_string(),
                min,
            });
        }
    }

    Ok(())
}

/// Stars must be picked (non-zero) and at most [`MAX_RATING`].
pub fn validate_rating(rating: u8) -> ValidationResult<()> {
    if rating == 0 {
        return Err(ValidationError::RatingRequired);
    }

    if rating > MAX_RATING {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 1,
            max: i64::from(MAX_RATING),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert_eq!(validate_email("  ana@bistro.test ").unwrap(), "ana@bistro.test");
        assert_eq!(
            validate_email("   ").unwrap_err().to_string(),
            "Please enter your email"
        );
    }

    #[test]
    fn test_validate_full_name() {
        assert!(validate_full_name("Ana Haddad").is_ok());
        assert_eq!(
            validate_full_name("").unwrap_err().to_string(),
            "Please enter your full name"
        );
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("x", None).is_ok());
        assert!(validate_password("secret", Some(MIN_PASSWORD_LEN)).is_ok());

        assert_eq!(
            validate_password("", None).unwrap_err().to_string(),
            "Please enter your password"
        );
        assert_eq!(
            validate_password("12345", Some(MIN_PASSWORD_LEN))
                .unwrap_err()
                .to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_validate_rating() {
        for stars in 1..=5 {
            assert!(validate_rating(stars).is_ok());
        }
        assert_eq!(validate_rating(0), Err(ValidationError::RatingRequired));
        assert!(matches!(
            validate_rating(6),
            Err(ValidationError::OutOfRange { min: 1, max: 5, .. })
        ));
    }
}
