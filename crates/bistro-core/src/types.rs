//! # Domain Types
//!
//! Records shared between the in-memory state, the DataStore and the screens.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  Backend-owned (bistro-db)          Client-owned (this crate's state)  │
//! │  ─────────────────────────          ─────────────────────────────────  │
//! │  ┌─────────────┐ ┌─────────────┐    ┌─────────────┐ ┌─────────────┐   │
//! │  │  Category   │ │    Food     │───►│  CartItem   │ │  SavedItem  │   │
//! │  │  id, name   │ │  id, price  │    │  quantity   │ │  rating     │   │
//! │  └─────────────┘ └─────────────┘    └─────────────┘ └─────────────┘   │
//! │  ┌─────────────┐ ┌─────────────┐    ┌─────────────┐                   │
//! │  │    User     │ │   Review    │    │   Payment   │ (derived)        │
//! │  │  sentinel 0 │ │  rating 1-5 │    │  total      │                   │
//! │  └─────────────┘ └─────────────┘    └─────────────┘                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Product identity is the backend's integer id. A cart line and a saved
//! item both reuse the id of the food they were built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Catalog
// =============================================================================

/// A dish category shown on the home and category screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

/// A dish available for ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Food {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,

    /// Listed price. Dishes without one are added to the cart at $0.00.
    #[serde(default)]
    pub price: Option<Money>,

    /// Average star rating (0-5).
    #[serde(default)]
    pub rating: Option<f64>,

    /// Free-form nutrition blurb, shown only when present.
    #[serde(default)]
    pub nutritional_info: Option<String>,

    #[serde(default)]
    pub category_id: Option<i64>,
}

impl Food {
    /// Price used when the dish goes into the cart.
    pub fn unit_price(&self) -> Money {
        self.price.unwrap_or_default()
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One line of the cart.
///
/// ## Invariants (kept by [`crate::Cart`])
/// - At most one line per `id`
/// - `quantity >= 1`; a line that would drop to 0 is removed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product id, unique within the cart.
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: Money,
    pub quantity: u32,
    pub category: String,
}

impl CartItem {
    /// Creates a cart line with no image or category.
    pub fn new(id: i64, name: impl Into<String>, price: Money, quantity: u32) -> Self {
        CartItem {
            id,
            name: name.into(),
            image: String::new(),
            price,
            quantity,
            category: String::new(),
        }
    }

    /// Builds a cart line from a dish at the chosen quantity.
    ///
    /// The dish details screen never offers less than one portion, so the
    /// quantity is clamped to 1.
    pub fn from_food(food: &Food, quantity: u32) -> Self {
        CartItem {
            id: food.id,
            name: food.name.clone(),
            image: food.image_url.clone(),
            price: food.unit_price(),
            quantity: quantity.max(1),
            category: String::new(),
        }
    }

    /// Price × quantity.
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Saved Item
// =============================================================================

/// A favorited dish. No quantity: saving is a yes/no toggle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedItem {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub price: Money,
    pub rating: f64,
    pub category: String,
    pub description: String,
}

impl SavedItem {
    /// Builds a saved entry from a dish.
    pub fn from_food(food: &Food) -> Self {
        SavedItem {
            id: food.id,
            name: food.name.clone(),
            image: food.image_url.clone(),
            price: food.unit_price(),
            rating: food.rating.unwrap_or(0.0),
            category: String::new(),
            description: food.description.clone(),
        }
    }
}

// =============================================================================
// Payment
// =============================================================================

/// The payment breakdown derived from the cart.
///
/// Never mutated directly: [`crate::Cart`] recomputes it on every change.
/// `total == subtotal + delivery_fee + tax` always holds exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Payment {
    pub subtotal: Money,
    pub delivery_fee: Money,
    pub tax: Money,
    pub total: Money,
}

// =============================================================================
// User
// =============================================================================

/// A storefront account.
///
/// `User::default()` is the "not signed in" sentinel: id 0 and empty strings.
/// The password is stored and compared in plaintext, as the backend does.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// True for the empty sentinel held before anyone signs in.
    pub fn is_anonymous(&self) -> bool {
        self.id == 0 && self.email.is_empty()
    }
}

/// Sign-up payload: a user before the backend has assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// =============================================================================
// Review
// =============================================================================

/// A post-order rating. Owned by the backend once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Review {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Stars, 1 through 5.
    pub rating: u8,
    /// Author; 0 when submitted without a signed-in user.
    pub user_id: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Unit Tests
// =============================================================================
