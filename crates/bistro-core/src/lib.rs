//! # bistro-core: Pure Storefront State
//!
//! The in-memory state behind the Bistro food-ordering screens: the cart,
//! the saved-items list, the signed-in user and the payment breakdown
//! derived from the cart. Nothing here touches the network or the disk.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Bistro Storefront Architecture                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Mobile screens (external)                    │   │
//! │  │    Home ──► Dish ──► Cart ──► Payment ──► Reviews              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    storefront commands                          │   │
//! │  │    sign_in, add_dish_to_cart, place_order, submit_review       │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────┐  ┌────────▼──────────────────┐    │
//! │  │   ★ bistro-core (THIS CRATE) ★  │  │   bistro-db (DataStore)   │    │
//! │  │                                 │  │   users, foods,           │    │
//! │  │   AppContext                    │  │   categories, reviews     │    │
//! │  │   ├── Cart ──► Payment          │  └───────────────────────────┘    │
//! │  │   ├── SavedItems                │                                   │
//! │  │   └── SessionStore              │                                   │
//! │  │                                 │                                   │
//! │  │   NO I/O • NO AWAIT • NO LOCKS  │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records shared with the store and the screens
//! - [`money`] - Exact decimal `Money` and `TaxRate`
//! - [`pricing`] - Cart contents → `Payment` breakdown
//! - [`cart`] - Cart manager
//! - [`saved`] - Saved-items manager
//! - [`session`] - Current-user store
//! - [`context`] - `AppContext` and its `ContextProvider`
//! - [`validation`] - Input checks used by the sign-in, sign-up and review flows
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use bistro_core::{AppContext, CartItem, Money};
//!
//! let mut ctx = AppContext::new();
//! let payment = ctx.add_to_cart(CartItem::new(1, "Falafel Wrap", Money::from_cents(1000), 1));
//!
//! assert_eq!(payment.subtotal, Money::from_cents(1000));
//! assert_eq!(payment.total.to_string(), "$14.79");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod context;
pub mod error;
pub mod money;
pub mod pricing;
pub mod saved;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use context::{AppContext, ContextProvider};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, TaxRate};
pub use pricing::{calculate_payment, PricingPolicy};
pub use saved::SavedItems;
pub use session::{SessionState, SessionStore};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat delivery fee added to every order, in cents ($3.99).
pub const DELIVERY_FEE_CENTS: i64 = 399;

/// Sales tax applied to the cart subtotal, in basis points (800 = 8%).
pub const TAX_RATE_BPS: u32 = 800;
