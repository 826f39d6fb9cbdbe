//! # Saved-Items Commands

use tracing::debug;

use bistro_core::{ContextProvider, SavedItem};

use crate::error::ApiError;
use crate::state::StoreState;

/// Saves the dish, or unsaves it if it's already saved.
///
/// Returns whether the dish is saved afterwards.
pub async fn toggle_saved(
    store: &StoreState,
    ctx: &mut ContextProvider,
    dish_id: i64,
) -> Result<bool, ApiError> {
    debug!(dish_id, "toggle_saved command");

    let food = store.foods().get_by_id(dish_id).await?;
    Ok(ctx.use_cart_mut()?.toggle_saved_item(SavedItem::from_food(&food)))
}

pub fn get_saved_items(ctx: &ContextProvider) -> Result<Vec<SavedItem>, ApiError> {
    debug!("get_saved_items command");
    Ok(ctx.use_cart()?.saved_items().items().to_vec())
}

pub fn remove_saved_item(ctx: &mut ContextProvider, dish_id: i64) -> Result<Vec<SavedItem>, ApiError> {
    debug!(dish_id, "remove_saved_item command");
    let app = ctx.use_cart_mut()?;
    app.remove_from_saved_items(dish_id);
    Ok(app.saved_items().items().to_vec())
}

pub fn clear_saved_items(ctx: &mut ContextProvider) -> Result<(), ApiError> {
    debug!("clear_saved_items command");
    ctx.use_cart_mut()?.clear_saved_items();
    Ok(())
}
