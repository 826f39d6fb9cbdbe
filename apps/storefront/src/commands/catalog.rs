//! # Catalog Commands
//!
//! Read-only browsing: the home screen lists, a category's dishes and the
//! dish-details screen.

use serde::Serialize;
use tracing::debug;

use bistro_core::{Category, ContextProvider, Food};

use crate::error::ApiError;
use crate::navigation::{Route, Router};
use crate::state::{StoreConfig, StoreState};

/// A category with the dishes filed under it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFoods {
    pub category: Category,
    pub foods: Vec<Food>,
}

/// Dish details plus how the dish relates to the current state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DishDetails {
    pub food: Food,
    pub is_saved: bool,
    /// Quantity already in the cart (0 when absent)
    pub in_cart: u32,
}

pub async fn list_categories(store: &StoreState) -> Result<Vec<Category>, ApiError> {
    debug!("list_categories command");
    Ok(store.categories().list().await?)
}

pub async fn list_foods(store: &StoreState) -> Result<Vec<Food>, ApiError> {
    debug!("list_foods command");
    Ok(store.foods().list().await?)
}

/// The category screen's data.
///
/// The category whose id is `config.all_category_id` lists every dish
/// instead of the dishes filed under it.
pub async fn category_foods(
    store: &StoreState,
    config: &StoreConfig,
    category_id: i64,
) -> Result<CategoryFoods, ApiError> {
    debug!(category_id, "category_foods command");

    let category = store.categories().get_by_id(category_id).await?;
    let foods = if config.all_category_id == Some(category_id) {
        store.foods().list().await?
    } else {
        store.foods().by_category(category_id).await?
    };

    Ok(CategoryFoods { category, foods })
}

pub async fn dish_details(
    store: &StoreState,
    ctx: &ContextProvider,
    dish_id: i64,
) -> Result<DishDetails, ApiError> {
    debug!(dish_id, "dish_details command");

    let food = store.foods().get_by_id(dish_id).await?;
    let app = ctx.use_cart()?;

    Ok(DishDetails {
        is_saved: app.saved_items().contains(food.id),
        in_cart: app.cart().get(food.id).map_or(0, |line| line.quantity),
        food,
    })
}

pub fn open_category(router: &mut dyn Router, category_id: i64) {
    router.push(Route::Category { category_id });
}

pub fn open_dish(router: &mut dyn Router, dish_id: i64) {
    router.push(Route::DishDetails { dish_id });
}
