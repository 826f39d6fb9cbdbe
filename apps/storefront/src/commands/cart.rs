//! # Cart Commands
//!
//! Cart manipulation for the dish-details and cart screens.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Payment  │────►│  Order   │       │
//! │  │  Cart    │     │          │     │  screen  │     │  placed  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │             add_dish_to_cart                        place_order        │
//! │             increase / decrease                     (payment.rs)       │
//! │             remove_from_cart                             │              │
//! │                        │                                 ▼              │
//! │                   clear_cart ─────────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use bistro_core::{Cart, CartItem, ContextProvider, Payment};

use crate::error::ApiError;
use crate::navigation::{Route, Router};
use crate::state::StoreState;

/// Cart response including items and the payment breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub payment: Payment,
    pub item_count: usize,
    pub total_quantity: u32,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            payment: cart.payment(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
        }
    }
}

pub fn get_cart(ctx: &ContextProvider) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    Ok(CartResponse::from(ctx.use_cart()?.cart()))
}

/// Adds a dish to the cart and opens the cart screen.
///
/// ## Behavior
/// - The dish is fetched for its current name, image and price
/// - Dish already in cart: its quantity goes up by one, `quantity` is ignored
/// - Dish not in cart: added with `quantity` (at least 1)
pub async fn add_dish_to_cart(
    store: &StoreState,
    ctx: &mut ContextProvider,
    router: &mut dyn Router,
    dish_id: i64,
    quantity: u32,
) -> Result<CartResponse, ApiError> {
    debug!(dish_id, quantity, "add_dish_to_cart command");

    let food = store.foods().get_by_id(dish_id).await?;

    let app = ctx.use_cart_mut()?;
    app.add_to_cart(CartItem::from_food(&food, quantity));
    let response = CartResponse::from(app.cart());

    router.push(Route::Cart);
    Ok(response)
}

pub fn increase_quantity(ctx: &mut ContextProvider, dish_id: i64) -> Result<CartResponse, ApiError> {
    debug!(dish_id, "increase_quantity command");
    let app = ctx.use_cart_mut()?;
    app.increase_quantity(dish_id);
    Ok(CartResponse::from(app.cart()))
}

/// At quantity 1 the line is removed.
pub fn decrease_quantity(ctx: &mut ContextProvider, dish_id: i64) -> Result<CartResponse, ApiError> {
    debug!(dish_id, "decrease_quantity command");
    let app = ctx.use_cart_mut()?;
    app.decrease_quantity(dish_id);
    Ok(CartResponse::from(app.cart()))
}

pub fn remove_from_cart(ctx: &mut ContextProvider, dish_id: i64) -> Result<CartResponse, ApiError> {
    debug!(dish_id, "remove_from_cart command");
    let app = ctx.use_cart_mut()?;
    app.remove_from_cart(dish_id);
    Ok(CartResponse::from(app.cart()))
}

pub fn clear_cart(ctx: &mut ContextProvider) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");
    let app = ctx.use_cart_mut()?;
    app.clear_cart();
    Ok(CartResponse::from(app.cart()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::harness;
    use crate::error::ErrorCode;
    use crate::navigation::Navigation;
    use bistro_core::Money;

    #[tokio::test]
    async fn test_add_same_dish_twice() {
        let mut h = harness().await;

        add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 1, 1).await.unwrap();
        let cart = add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 1, 1)
            .await
            .unwrap();

        assert_eq!(cart.item_count, 1);
        assert_eq!(cart.total_quantity, 2);
        assert_eq!(cart.payment.subtotal, Money::from_cents(2000));
        assert_eq!(cart.payment.tax, Money::from_cents(160));
        assert_eq!(cart.payment.total, Money::from_cents(2559));
        assert_eq!(h.router.last(), Some(Navigation::Push(Route::Cart)));
    }

    #[tokio::test]
    async fn test_added_line_copies_dish() {
        let mut h = harness().await;

        let cart = add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 2, 3)
            .await
            .unwrap();

        let line = &cart.items[0];
        assert_eq!(line.name, "Kofta");
        assert_eq!(line.image, "https://img.bistro.test/2.jpg");
        assert_eq!(line.quantity, 3);
        assert_eq!(line.category, "");
    }

    #[tokio::test]
    async fn test_add_missing_dish_leaves_cart_alone() {
        let mut h = harness().await;

        let err = add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 404, 1)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&h.ctx).unwrap().items.is_empty());
        assert!(h.router.log().is_empty());
    }

    #[tokio::test]
    async fn test_quantity_commands() {
        let mut h = harness().await;
        add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 2, 3).await.unwrap();

        let cart = decrease_quantity(&mut h.ctx, 2).unwrap();
        assert_eq!(cart.total_quantity, 2);

        let cart = increase_quantity(&mut h.ctx, 2).unwrap();
        assert_eq!(cart.total_quantity, 3);

        let cart = remove_from_cart(&mut h.ctx, 2).unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.payment.subtotal, Money::zero());
        assert_eq!(cart.payment.tax, Money::zero());
        assert_eq!(cart.payment.total, Money::from_cents(399));
    }

    #[tokio::test]
    async fn test_decrease_last_unit_removes() {
        let mut h = harness().await;
        add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 3, 1).await.unwrap();

        let cart = decrease_quantity(&mut h.ctx, 3).unwrap();
        assert_eq!(cart.item_count, 0);
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let mut h = harness().await;
        add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 1, 1).await.unwrap();
        add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 2, 1).await.unwrap();

        let cart = clear_cart(&mut h.ctx).unwrap();
        assert_eq!(cart.item_count, 0);
        assert_eq!(cart.payment.total, Money::from_cents(399));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let ctx = ContextProvider::new();
        let json = serde_json::to_value(get_cart(&ctx).unwrap()).unwrap();
        assert_eq!(json["itemCount"], 0);
        assert_eq!(json["payment"]["deliveryFee"], "3.99");
    }
}
