//! # Review Commands
//!
//! The post-order review screen: a star rating plus an optional comment.

use tracing::{debug, info};

use bistro_core::validation::validate_rating;
use bistro_core::{ContextProvider, Review};

use crate::error::ApiError;
use crate::navigation::{Route, Router};
use crate::state::StoreState;

/// Caption shown under the stars for the selected rating.
pub fn rating_label(rating: u8) -> &'static str {
    match rating {
        1 => "Poor",
        2 => "Fair",
        3 => "Good",
        4 => "Very Good",
        5 => "Excellent",
        _ => "Rate your experience",
    }
}

/// Stores the review and returns to the home screen.
///
/// The author is the current user; without one the review is stored with
/// `user_id` 0.
///
/// ## Errors
/// - `VALIDATION_ERROR` when no star is selected; nothing is stored and
///   the screen stays put
pub async fn submit_review(
    store: &StoreState,
    ctx: &ContextProvider,
    router: &mut dyn Router,
    rating: u8,
    description: &str,
) -> Result<Review, ApiError> {
    debug!(rating, "submit_review command");

    validate_rating(rating)?;

    let user_id = ctx.use_cart()?.current_user().id;
    let review = store
        .reviews()
        .insert(&Review {
            id: None,
            rating,
            user_id,
            description: description.trim().to_string(),
            created_at: None,
        })
        .await?;

    info!(review_id = ?review.id, user_id, rating, "Review submitted");

    router.push(Route::Home);
    Ok(review)
}

/// Leaves the review screen without rating.
pub fn skip_review(router: &mut dyn Router) {
    debug!("skip_review command");
    router.push(Route::Home);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::harness;
    use crate::error::ErrorCode;
    use crate::navigation::Navigation;
    use bistro_core::User;

    #[tokio::test]
    async fn test_submit_without_rating() {
        let mut h = harness().await;

        let err = submit_review(&h.store, &h.ctx, &mut h.router, 0, "ok")
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(
            err.message,
            "Please select a star rating before submitting your review."
        );
        assert!(h.router.log().is_empty());
        assert!(h.store.reviews().by_user(0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_as_signed_in_user() {
        let mut h = harness().await;
        h.ctx.use_cart_mut().unwrap().set_current_user(User {
            id: 7,
            email: "rana@bistro.test".into(),
            ..User::default()
        });

        let review = submit_review(&h.store, &h.ctx, &mut h.router, 4, " Tasty ")
            .await
            .unwrap();

        assert_eq!(review.user_id, 7);
        assert_eq!(review.rating, 4);
        assert_eq!(review.description, "Tasty");
        assert!(review.id.is_some());
        assert_eq!(h.router.last(), Some(Navigation::Push(Route::Home)));
        assert_eq!(h.store.reviews().by_user(7).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_anonymous_review_uses_zero() {
        let mut h = harness().await;
        let review = submit_review(&h.store, &h.ctx, &mut h.router, 5, "")
            .await
            .unwrap();
        assert_eq!(review.user_id, 0);
    }

    #[test]
    fn test_skip_and_labels() {
        let mut router = crate::navigation::RecordingRouter::default();
        skip_review(&mut router);
        assert_eq!(router.last(), Some(Navigation::Push(Route::Home)));

        assert_eq!(rating_label(0), "Rate your experience");
        assert_eq!(rating_label(3), "Good");
        assert_eq!(rating_label(5), "Excellent");
    }
}
