//! # Profile Command

use serde::Serialize;
use tracing::debug;

use bistro_core::{ContextProvider, Review};

use crate::error::ApiError;
use crate::state::StoreState;

/// What the profile screen shows for the current user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub avatar: String,
    /// e.g. "March 4, 2025"; absent when the account has no creation time
    pub join_date: Option<String>,
    pub saved_count: usize,
    pub reviews: Vec<Review>,
}

/// Builds the profile screen's data.
///
/// Works for the anonymous sentinel too: the fields are empty and no
/// reviews are looked up.
pub async fn get_profile(store: &StoreState, ctx: &ContextProvider) -> Result<Profile, ApiError> {
    debug!("get_profile command");

    let app = ctx.use_cart()?;
    let user = app.current_user();

    let reviews = if user.id != 0 {
        store.reviews().by_user(user.id).await?
    } else {
        Vec::new()
    };

    Ok(Profile {
        name: user.full_name.clone(),
        email: user.email.clone(),
        avatar: user.avatar_url.clone(),
        join_date: user
            .created_at
            .map(|at| at.format("%B %-d, %Y").to_string()),
        saved_count: app.saved_items().len(),
        reviews,
    })
}
