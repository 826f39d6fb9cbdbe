//! # Cart Manager
//!
//! The ordered list of cart lines plus the payment derived from it.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Operation               Cart Change           │
//! │  ─────────────            ─────────               ───────────           │
//! │                                                                         │
//! │  "Add to cart" ─────────► add_to_cart() ───────► push, or +1 if present │
//! │                                                                         │
//! │  Tap "+" ───────────────► increase_quantity() ──► items[i].qty += 1     │
//! │                                                                         │
//! │  Tap "−" ───────────────► decrease_quantity() ──► qty -= 1, drop at 0   │
//! │                                                                         │
//! │  Tap trash ─────────────► remove_from_cart() ───► items.retain(..)      │
//! │                                                                         │
//! │  Order placed ──────────► clear_cart() ─────────► items.clear()         │
//! │                                                                         │
//! │  Every row above ends with: payment = policy.calculate(&items)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations on an id that is not in the cart are silent no-ops.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::pricing::PricingPolicy;
use crate::types::{CartItem, Payment};

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `id` (adding a product already present bumps it by one)
/// - `quantity >= 1` on every line
/// - `payment` always reflects the current `items`
///
/// Deserializing reads only `items`, checks the first two invariants and
/// reprices; a stored `payment` is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CartLines")]
pub struct Cart {
    items: Vec<CartItem>,
    payment: Payment,
    #[serde(skip)]
    policy: PricingPolicy,
}

impl Cart {
    /// Creates a new empty cart with the storefront's pricing.
    pub fn new() -> Self {
        Cart::with_policy(PricingPolicy::default())
    }

    /// Creates a new empty cart priced by `policy`.
    pub fn with_policy(policy: PricingPolicy) -> Self {
        Cart {
            items: Vec::new(),
            payment: policy.calculate(&[]),
            policy,
        }
    }

    /// Adds a line, or bumps the existing line for the same id by one.
    ///
    /// ## Behavior
    /// - Id already in cart: same as [`Cart::increase_quantity`]; the incoming
    ///   quantity is ignored
    /// - Id not in cart: appended with its own quantity
    pub fn add_to_cart(&mut self, item: CartItem) -> Payment {
        if self.contains(item.id) {
            return self.increase_quantity(item.id);
        }

        debug!(id = item.id, quantity = item.quantity, "cart line added");
        self.items.push(item);
        self.reprice()
    }

    /// Increments the matching line by one.
    pub fn increase_quantity(&mut self, id: i64) -> Payment {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = item.quantity.saturating_add(1);
            debug!(id, quantity = item.quantity, "cart line increased");
        }
        self.reprice()
    }

    /// Decrements the matching line by one, removing it instead of reaching 0.
    pub fn decrease_quantity(&mut self, id: i64) -> Payment {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) if item.quantity > 1 => {
                item.quantity -= 1;
                debug!(id, quantity = item.quantity, "cart line decreased");
                self.reprice()
            }
            Some(_) => self.remove_from_cart(id),
            None => self.reprice(),
        }
    }

    /// Removes the line with this id, if any.
    pub fn remove_from_cart(&mut self, id: i64) -> Payment {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() != before {
            debug!(id, "cart line removed");
        }
        self.reprice()
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) -> Payment {
        self.items.clear();
        debug!("cart cleared");
        self.reprice()
    }

    /// Lines in the order they were first added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The breakdown for the current lines.
    pub fn payment(&self) -> Payment {
        self.payment
    }

    /// Looks up a line by product id.
    pub fn get(&self, id: i64) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of distinct lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn reprice(&mut self) -> Payment {
        self.payment = self.policy.calculate(&self.items);
        self.payment
    }
}

/// The deserialized form of a [`Cart`].
#[derive(Deserialize)]
struct CartLines {
    #[serde(default)]
    items: Vec<CartItem>,
}

impl TryFrom<CartLines> for Cart {
    type Error = CoreError;

    fn try_from(lines: CartLines) -> Result<Self, Self::Error> {
        let mut cart = Cart::new();
        for item in lines.items {
            if item.quantity == 0 {
                return Err(CoreError::InvalidCart(format!(
                    "line {} has quantity 0",
                    item.id
                )));
            }
            if cart.contains(item.id) {
                return Err(CoreError::InvalidCart(format!(
                    "line {} appears more than once",
                    item.id
                )));
            }
            cart.items.push(item);
        }
        cart.reprice();
        Ok(cart)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn item(id: i64, price_cents: i64, quantity: u32) -> CartItem {
        CartItem::new(id, format!("Dish {}", id), Money::from_cents(price_cents), quantity)
    }

    fn assert_payment_consistent(cart: &Cart) {
        let p = cart.payment();
        let subtotal: Money = cart.items().iter().map(CartItem::line_total).sum();
        assert_eq!(p.subtotal, subtotal);
        assert_eq!(p.delivery_fee, Money::from_cents(399));
        assert_eq!(p.tax, subtotal.calculate_tax(crate::TaxRate::from_bps(800)));
        assert_eq!(p.total, p.subtotal + p.delivery_fee + p.tax);
    }

    #[test]
    fn test_new_cart_is_priced() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.payment().total, Money::from_cents(399));
    }

    #[test]
    fn test_add_same_id_twice_bumps_quantity() {
        let mut cart = Cart::new();

        cart.add_to_cart(item(1, 1000, 1));
        let payment = cart.add_to_cart(item(1, 1000, 1));

        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.get(1).map(|i| i.quantity), Some(2));
        assert_eq!(payment.subtotal, Money::from_cents(2000));
        assert_eq!(payment.tax, Money::from_cents(160));
        assert_eq!(payment.delivery_fee, Money::from_cents(399));
        assert_eq!(payment.total, Money::from_cents(2559));
    }

    #[test]
    fn test_repeated_adds_count_each_call() {
        let mut cart = Cart::new();
        for _ in 0..5 {
            cart.add_to_cart(item(9, 250, 1));
        }
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_quantity(), 5);
    }

    #[test]
    fn test_add_existing_ignores_incoming_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(1, 500, 2));
        cart.add_to_cart(item(1, 500, 4));

        assert_eq!(cart.get(1).map(|i| i.quantity), Some(3));
    }

    #[test]
    fn test_new_line_keeps_its_quantity() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(1, 500, 4));
        assert_eq!(cart.total_quantity(), 4);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(3, 100, 1));
        cart.add_to_cart(item(1, 100, 1));
        cart.add_to_cart(item(2, 100, 1));
        cart.add_to_cart(item(3, 100, 1));

        let ids: Vec<i64> = cart.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_decrease_above_one_decrements() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(1, 300, 3));

        let payment = cart.decrease_quantity(1);

        assert_eq!(cart.get(1).map(|i| i.quantity), Some(2));
        assert_eq!(payment.subtotal, Money::from_cents(600));
    }

    #[test]
    fn test_decrease_at_one_removes_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(1, 300, 1));
        cart.add_to_cart(item(2, 100, 1));

        cart.decrease_quantity(1);

        assert!(!cart.contains(1));
        assert_eq!(cart.item_count(), 1);
        assert_payment_consistent(&cart);
    }

    #[test]
    fn test_decrease_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(1, 300, 2));
        let before = cart.items().to_vec();

        let payment = cart.decrease_quantity(42);

        assert_eq!(cart.items(), before.as_slice());
        assert_eq!(payment.subtotal, Money::from_cents(600));
    }

    #[test]
    fn test_increase_absent_id_is_noop() {
        let mut cart = Cart::new();
        cart.increase_quantity(42);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_only_line() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(2, 500, 3));

        let payment = cart.remove_from_cart(2);

        assert!(cart.is_empty());
        assert_eq!(payment.subtotal, Money::zero());
        assert_eq!(payment.tax, Money::zero());
        assert_eq!(payment.total, Money::from_cents(399));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(1, 999, 2));
        cart.add_to_cart(item(2, 199, 1));

        let payment = cart.clear_cart();

        assert!(cart.is_empty());
        assert_eq!(payment.total, Money::from_cents(399));
    }

    #[test]
    fn test_increase_saturates() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(1, 1, u32::MAX));

        cart.increase_quantity(1);

        assert_eq!(cart.get(1).map(|i| i.quantity), Some(u32::MAX));
    }

    #[test]
    fn test_deserialize_reprices_and_ignores_stored_payment() {
        let cart: Cart = serde_json::from_value(serde_json::json!({
            "items": [{
                "id": 1, "name": "Hummus", "image": "", "price": "10",
                "quantity": 2, "category": ""
            }],
            "payment": {"subtotal": "0", "deliveryFee": "0", "tax": "0", "total": "0"}
        }))
        .unwrap();

        assert_eq!(cart.payment(), crate::calculate_payment(cart.items()));
        assert_eq!(cart.payment().total, Money::from_cents(2559));
        assert_payment_consistent(&cart);
    }

    #[test]
    fn test_deserialize_rejects_broken_lines() {
        let line = |id: i64, quantity: u32| {
            serde_json::json!({
                "id": id, "name": "Kofta", "image": "", "price": "5",
                "quantity": quantity, "category": ""
            })
        };

        let zero = serde_json::from_value::<Cart>(serde_json::json!({ "items": [line(1, 0)] }));
        assert!(zero.unwrap_err().to_string().contains("quantity 0"));

        let duplicate = serde_json::from_value::<Cart>(serde_json::json!({
            "items": [line(1, 1), line(1, 3)]
        }));
        assert!(duplicate.unwrap_err().to_string().contains("more than once"));
    }

    #[test]
    fn test_serialize_round_trip_keeps_lines() {
        let mut cart = Cart::new();
        cart.add_to_cart(item(4, 850, 2));

        let back: Cart = serde_json::from_value(serde_json::to_value(&cart).unwrap()).unwrap();
        assert_eq!(back.items(), cart.items());
        assert_eq!(back.payment(), cart.payment());
    }

    #[test]
    fn test_payment_consistent_after_every_step() {
        let mut cart = Cart::new();
        let steps: Vec<Box<dyn Fn(&mut Cart) -> Payment>> = vec![
            Box::new(|c| c.add_to_cart(item(1, 1099, 1))),
            Box::new(|c| c.add_to_cart(item(2, 333, 3))),
            Box::new(|c| c.increase_quantity(1)),
            Box::new(|c| c.add_to_cart(item(2, 333, 1))),
            Box::new(|c| c.decrease_quantity(1)),
            Box::new(|c| c.decrease_quantity(1)),
            Box::new(|c| c.remove_from_cart(7)),
            Box::new(|c| c.remove_from_cart(2)),
        ];

        for step in steps {
            let returned = step(&mut cart);
            assert_eq!(returned, cart.payment());
            assert_payment_consistent(&cart);
        }
        assert!(cart.is_empty());
    }
}
