//! # Payment Commands
//!
//! Checkout summary and the simulated payment step.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart screen                                                            │
//! │      │ checkout()          empty cart ──► EMPTY_CART, stay on Cart     │
//! │      ▼                                                                  │
//! │  Payment screen  (address, window, method, breakdown)                  │
//! │      │ place_order(method) empty cart ──► EMPTY_CART                   │
//! │      ▼                                                                  │
//! │  cart cleared ──► OrderConfirmation ──► push(Reviews)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No payment provider is contacted. Placing an order always succeeds for a
//! non-empty cart and nothing about it is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use bistro_core::{CartItem, ContextProvider, Payment};

use crate::error::ApiError;
use crate::navigation::{Route, Router};
use crate::state::StoreConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaymentMethod {
    #[default]
    ApplePay,
    GooglePay,
    DigitalWallet,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::ApplePay,
        PaymentMethod::GooglePay,
        PaymentMethod::DigitalWallet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::GooglePay => "Google Pay",
            PaymentMethod::DigitalWallet => "Digital Wallet",
        }
    }
}

/// What the payment screen shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub items: Vec<CartItem>,
    pub payment: Payment,
    /// `payment.total` formatted for display
    pub total_display: String,
    pub delivery_address: String,
    pub delivery_window: String,
    pub methods: Vec<PaymentMethod>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub reference: Uuid,
    pub method: PaymentMethod,
    pub payment: Payment,
    pub delivery_address: String,
    pub delivery_window: String,
    pub placed_at: DateTime<Utc>,
}

/// Opens the payment screen for the current cart.
///
/// ## Errors
/// - `EMPTY_CART` when there is nothing to pay for; no navigation happens
pub fn checkout(
    ctx: &ContextProvider,
    router: &mut dyn Router,
    config: &StoreConfig,
) -> Result<CheckoutSummary, ApiError> {
    debug!("checkout command");

    let cart = ctx.use_cart()?.cart();
    if cart.is_empty() {
        return Err(ApiError::empty_cart());
    }

    let payment = cart.payment();
    let summary = CheckoutSummary {
        items: cart.items().to_vec(),
        payment,
        total_display: config.format_currency(payment.total),
        delivery_address: config.delivery_address.clone(),
        delivery_window: config.delivery_window.clone(),
        methods: PaymentMethod::ALL.to_vec(),
    };

    router.push(Route::Payment);
    Ok(summary)
}

/// Simulates paying for the current cart.
///
/// The cart is cleared and the review screen opens. The confirmation keeps
/// the breakdown that was charged.
pub fn place_order(
    ctx: &mut ContextProvider,
    router: &mut dyn Router,
    config: &StoreConfig,
    method: PaymentMethod,
) -> Result<OrderConfirmation, ApiError> {
    debug!(method = method.label(), "place_order command");

    let app = ctx.use_cart_mut()?;
    if app.cart().is_empty() {
        return Err(ApiError::empty_cart());
    }

    let payment = app.total_payment();
    app.clear_cart();

    let confirmation = OrderConfirmation {
        reference: Uuid::new_v4(),
        method,
        payment,
        delivery_address: config.delivery_address.clone(),
        delivery_window: config.delivery_window.clone(),
        placed_at: Utc::now(),
    };

    info!(
        reference = %confirmation.reference,
        total = %payment.total,
        method = method.label(),
        "Order placed"
    );

    router.push(Route::Reviews);
    Ok(confirmation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_dish_to_cart;
    use crate::commands::test_support::harness;
    use crate::error::ErrorCode;
    use crate::navigation::Navigation;
    use bistro_core::Money;

    #[tokio::test]
    async fn test_checkout_empty_cart() {
        let mut h = harness().await;
        let config = StoreConfig::default();

        let err = checkout(&h.ctx, &mut h.router, &config).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(err.message, "Please add items to your cart before checkout.");
        assert!(h.router.log().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_summary() {
        let mut h = harness().await;
        let config = StoreConfig::default();
        add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 1, 2).await.unwrap();

        let summary = checkout(&h.ctx, &mut h.router, &config).unwrap();

        assert_eq!(summary.payment.total, Money::from_cents(2559));
        assert_eq!(summary.total_display, "$25.59");
        assert_eq!(summary.delivery_address, "Palestine, Gaza");
        assert_eq!(summary.methods.len(), 3);
        assert_eq!(h.router.last(), Some(Navigation::Push(Route::Payment)));
    }

    #[tokio::test]
    async fn test_place_order_clears_cart() {
        let mut h = harness().await;
        let config = StoreConfig::default();
        add_dish_to_cart(&h.store, &mut h.ctx, &mut h.router, 2, 1).await.unwrap();

        let order = place_order(&mut h.ctx, &mut h.router, &config, PaymentMethod::GooglePay)
            .unwrap();

        assert_eq!(order.method, PaymentMethod::GooglePay);
        assert_eq!(order.payment.subtotal, Money::from_cents(500));
        assert_eq!(order.payment.tax, Money::from_cents(40));
        assert_eq!(order.payment.total, Money::from_cents(939));

        let app = h.ctx.use_cart().unwrap();
        assert!(app.cart().is_empty());
        assert_eq!(app.total_payment().total, Money::from_cents(399));
        assert_eq!(h.router.last(), Some(Navigation::Push(Route::Reviews)));
    }

    #[tokio::test]
    async fn test_place_order_empty_cart() {
        let mut h = harness().await;
        let err = place_order(
            &mut h.ctx,
            &mut h.router,
            &StoreConfig::default(),
            PaymentMethod::ApplePay,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
    }

    #[test]
    fn test_method_labels() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::ApplePay);
        let labels: Vec<&str> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Apple Pay", "Google Pay", "Digital Wallet"]);

        let json = serde_json::to_value(PaymentMethod::DigitalWallet).unwrap();
        assert_eq!(json, "digitalWallet");
    }
}
