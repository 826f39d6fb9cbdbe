//! # Auth Commands
//!
//! Sign in, sign up and sign out.
//!
//! ## Sign-In Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  email, password                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate (both required) ──── blank? ──► "Please enter your email"    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  users().find_by_credentials ── none? ──► INVALID_CREDENTIALS          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set_current_user(user) ──► router.push(Home)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Credentials are compared in plaintext by the store. Signing out only
//! navigates: the current user stays in the session until the next sign-in.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing::{debug, info, warn};

use bistro_core::validation::{
    validate_email, validate_full_name, validate_password, MIN_PASSWORD_LEN,
};
use bistro_core::{ContextProvider, NewUser, User};
use bistro_db::DbError;

use crate::error::{ApiError, ErrorCode};
use crate::navigation::{Route, Router};
use crate::state::{StoreConfig, StoreState};

/// Signs in with an exact email/password match.
pub async fn sign_in(
    store: &StoreState,
    ctx: &mut ContextProvider,
    router: &mut dyn Router,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let email = validate_email(email)?;
    validate_password(password, None)?;

    debug!(email = %email, "sign_in command");

    let user = store
        .users()
        .find_by_credentials(&email, password)
        .await?
        .ok_or_else(|| {
            warn!(email = %email, "Sign-in rejected");
            ApiError::invalid_credentials()
        })?;

    ctx.use_cart_mut()?.set_current_user(user.clone());
    info!(user_id = user.id, "User signed in");

    router.push(Route::Home);
    Ok(user)
}

/// Registers a new account and signs it in.
///
/// ## Rules
/// - Full name, email and password are required
/// - Password must be at least 6 characters
/// - The email must not already have an account
pub async fn sign_up(
    store: &StoreState,
    ctx: &mut ContextProvider,
    router: &mut dyn Router,
    config: &StoreConfig,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let full_name = validate_full_name(full_name)?;
    let email = validate_email(email)?;
    validate_password(password, Some(MIN_PASSWORD_LEN))?;

    debug!(email = %email, "sign_up command");

    if store.users().email_exists(&email).await? {
        return Err(email_taken());
    }

    let new_user = NewUser {
        avatar_url: avatar_url(config, &full_name),
        full_name,
        email,
        password: password.to_string(),
        phone: None,
    };

    // A concurrent sign-up can still win the race past the check above
    let user = store.users().insert(&new_user).await.map_err(|e| match e {
        DbError::UniqueViolation { .. } => email_taken(),
        other => other.into(),
    })?;
    ctx.use_cart_mut()?.set_current_user(user.clone());
    info!(user_id = user.id, "User registered");

    router.push(Route::Home);
    Ok(user)
}

fn email_taken() -> ApiError {
    ApiError::new(
        ErrorCode::Duplicate,
        "An account with this email already exists.",
    )
}

/// Leaves for the sign-in screen. The session is left as it is.
pub fn sign_out(router: &mut dyn Router) {
    debug!("sign_out command");
    router.replace(Route::SignIn);
}

/// Initials avatar for a new account.
///
/// ## Example
/// ```rust
/// use bistro_storefront::commands::auth::avatar_url;
/// use bistro_storefront::state::StoreConfig;
///
/// assert_eq!(
///     avatar_url(&StoreConfig::default(), "Ana Haddad"),
///     "https://ui-avatars.com/api/?name=Ana%20Haddad&background=876d4c&color=2C1810",
/// );
/// ```
pub fn avatar_url(config: &StoreConfig, full_name: &str) -> String {
    format!(
        "{}?name={}&background={}&color={}",
        config.avatar_base_url,
        utf8_percent_encode(full_name, NON_ALPHANUMERIC),
        config.avatar_background,
        config.avatar_color
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::harness;
    use crate::navigation::Navigation;

    async fn register(h: &mut crate::commands::test_support::Harness) -> User {
        sign_up(
            &h.store,
            &mut h.ctx,
            &mut h.router,
            &StoreConfig::default(),
            "  Ana Haddad ",
            "ana@bistro.test",
            "secret1",
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_sign_up_stores_and_signs_in() {
        let mut h = harness().await;

        let user = register(&mut h).await;

        assert_eq!(user.full_name, "Ana Haddad");
        assert!(user.id > 0);
        assert!(user.avatar_url.contains("name=Ana%20Haddad"));
        assert_eq!(h.ctx.use_cart().unwrap().current_user(), &user);
        assert_eq!(h.router.last(), Some(Navigation::Push(Route::Home)));
    }

    #[tokio::test]
    async fn test_sign_up_validation_order() {
        let mut h = harness().await;
        let config = StoreConfig::default();

        let err = sign_up(&h.store, &mut h.ctx, &mut h.router, &config, "", "", "")
            .await
            .unwrap_err();
        assert_eq!(err.message, "Please enter your full name");

        let err = sign_up(&h.store, &mut h.ctx, &mut h.router, &config, "Ana", "a@b.c", "12345")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Password must be at least 6 characters");

        assert!(h.router.log().is_empty());
    }

    #[tokio::test]
    async fn test_sign_up_rejects_duplicate_email() {
        let mut h = harness().await;
        register(&mut h).await;

        let err = sign_up(
            &h.store,
            &mut h.ctx,
            &mut h.router,
            &StoreConfig::default(),
            "Someone Else",
            "ana@bistro.test",
            "another1",
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::Duplicate);
    }

    #[tokio::test]
    async fn test_sign_in_success() {
        let mut h = harness().await;
        let registered = register(&mut h).await;
        h.ctx.use_cart_mut().unwrap().set_current_user(User::default());

        let user = sign_in(&h.store, &mut h.ctx, &mut h.router, " ana@bistro.test ", "secret1")
            .await
            .unwrap();

        assert_eq!(user, registered);
        assert!(h.ctx.use_cart().unwrap().session().is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_wrong_password() {
        let mut h = harness().await;
        register(&mut h).await;
        let before = h.router.log().len();

        let err = sign_in(&h.store, &mut h.ctx, &mut h.router, "ana@bistro.test", "wrong!")
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(err.message, "Invalid email or password.");
        assert_eq!(h.router.log().len(), before);
    }

    #[tokio::test]
    async fn test_sign_in_requires_fields() {
        let mut h = harness().await;

        let err = sign_in(&h.store, &mut h.ctx, &mut h.router, "", "x").await.unwrap_err();
        assert_eq!(err.message, "Please enter your email");

        let err = sign_in(&h.store, &mut h.ctx, &mut h.router, "a@b.c", "").await.unwrap_err();
        assert_eq!(err.message, "Please enter your password");
    }

    #[tokio::test]
    async fn test_sign_out_keeps_session() {
        let mut h = harness().await;
        let user = register(&mut h).await;

        sign_out(&mut h.router);

        assert_eq!(h.router.last(), Some(Navigation::Replace(Route::SignIn)));
        assert_eq!(h.ctx.use_cart().unwrap().current_user(), &user);
    }

    #[tokio::test]
    async fn test_detached_context_is_configuration_error() {
        let mut h = harness().await;
        register(&mut h).await;
        let mut detached = ContextProvider::detached();

        let err = sign_in(&h.store, &mut detached, &mut h.router, "ana@bistro.test", "secret1")
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ConfigurationError);
    }
}
