//! # App Context
//!
//! The single state object every screen works against.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ContextProvider                                                        │
//! │  └── Option<AppContext>  ◄── None when detached / torn down            │
//! │       ├── Cart          (items + derived Payment)                      │
//! │       ├── SavedItems                                                   │
//! │       └── SessionStore  (current user)                                 │
//! │                                                                         │
//! │  Screens borrow the context through the provider:                      │
//! │    provider.use_cart()?      → &AppContext                             │
//! │    provider.use_cart_mut()?  → &mut AppContext                         │
//! │                                                                         │
//! │  The exclusive borrow is the only synchronization needed: mutators     │
//! │  are synchronous, so no await point ever splits an update.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::pricing::PricingPolicy;
use crate::saved::SavedItems;
use crate::session::SessionStore;
use crate::types::{CartItem, Payment, SavedItem, User};

/// Cart, saved items and session behind one set of operations.
#[derive(Debug, Clone, Default)]
pub struct AppContext {
    cart: Cart,
    saved: SavedItems,
    session: SessionStore,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context whose cart is priced by `policy`.
    pub fn with_policy(policy: PricingPolicy) -> Self {
        AppContext {
            cart: Cart::with_policy(policy),
            ..Self::default()
        }
    }

    // -------------------------------------------------------------------------
    // Cart
    // -------------------------------------------------------------------------

    pub fn add_to_cart(&mut self, item: CartItem) -> Payment {
        self.cart.add_to_cart(item)
    }

    pub fn remove_from_cart(&mut self, id: i64) -> Payment {
        self.cart.remove_from_cart(id)
    }

    pub fn increase_quantity(&mut self, id: i64) -> Payment {
        self.cart.increase_quantity(id)
    }

    pub fn decrease_quantity(&mut self, id: i64) -> Payment {
        self.cart.decrease_quantity(id)
    }

    pub fn clear_cart(&mut self) -> Payment {
        self.cart.clear_cart()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Payment for the current cart contents.
    pub fn total_payment(&self) -> Payment {
        self.cart.payment()
    }

    // -------------------------------------------------------------------------
    // Saved items
    // -------------------------------------------------------------------------

    pub fn add_to_saved_items(&mut self, item: SavedItem) {
        self.saved.add(item);
    }

    pub fn remove_from_saved_items(&mut self, id: i64) {
        self.saved.remove(id);
    }

    pub fn clear_saved_items(&mut self) {
        self.saved.clear();
    }

    /// Saves or unsaves the dish; returns whether it is saved afterwards.
    pub fn toggle_saved_item(&mut self, item: SavedItem) -> bool {
        self.saved.toggle(item)
    }

    pub fn saved_items(&self) -> &SavedItems {
        &self.saved
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    pub fn set_current_user(&mut self, user: User) {
        self.session.set_current_user(user);
    }

    pub fn current_user(&self) -> &User {
        self.session.current_user()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }
}

// =============================================================================
// Context Provider
// =============================================================================

/// Establishes the scope in which the context can be used.
///
/// Reading through a detached provider is a configuration mistake and
/// surfaces as [`CoreError::NotInitialized`].
#[derive(Debug)]
pub struct ContextProvider {
    context: Option<AppContext>,
}

impl ContextProvider {
    /// A provider holding a fresh, empty context.
    pub fn new() -> Self {
        ContextProvider::with_context(AppContext::new())
    }

    pub fn with_context(context: AppContext) -> Self {
        debug!("context provider established");
        ContextProvider {
            context: Some(context),
        }
    }

    /// A provider with no context behind it.
    pub fn detached() -> Self {
        ContextProvider { context: None }
    }

    pub fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    /// Borrows the context for reading.
    pub fn use_cart(&self) -> CoreResult<&AppContext> {
        self.context.as_ref().ok_or(CoreError::NotInitialized)
    }

    /// Borrows the context for mutation.
    pub fn use_cart_mut(&mut self) -> CoreResult<&mut AppContext> {
        self.context.as_mut().ok_or(CoreError::NotInitialized)
    }

    /// Tears the scope down, handing back whatever context it held.
    pub fn take(&mut self) -> Option<AppContext> {
        self.context.take()
    }
}

impl Default for ContextProvider {
    fn default() -> Self {
        ContextProvider::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn shawarma() -> CartItem {
        CartItem::new(1, "Shawarma", Money::from_cents(1000), 1)
    }

    #[test]
    fn test_context_operations_route_to_stores() {
        let mut ctx = AppContext::new();

        ctx.add_to_cart(shawarma());
        let payment = ctx.add_to_cart(shawarma());
        assert_eq!(payment.total, Money::from_cents(2559));
        assert_eq!(ctx.total_payment(), payment);

        ctx.add_to_saved_items(SavedItem {
            id: 4,
            name: "Tabbouleh".to_string(),
            image: String::new(),
            price: Money::from_cents(450),
            rating: 4.2,
            category: String::new(),
            description: String::new(),
        });
        assert_eq!(ctx.saved_items().len(), 1);
        assert!(!ctx.cart().contains(4));

        ctx.clear_cart();
        assert_eq!(ctx.saved_items().len(), 1);
    }

    #[test]
    fn test_remove_then_empty_total() {
        let mut ctx = AppContext::new();
        ctx.add_to_cart(CartItem::new(2, "Soup", Money::from_cents(500), 3));

        let payment = ctx.remove_from_cart(2);

        assert!(ctx.cart().is_empty());
        assert_eq!(payment.subtotal, Money::zero());
        assert_eq!(payment.total, Money::from_cents(399));
    }

    #[test]
    fn test_current_user_round_trip() {
        let mut ctx = AppContext::new();
        let ana = User {
            id: 5,
            full_name: "Ana".to_string(),
            ..User::default()
        };

        ctx.set_current_user(ana.clone());
        assert_eq!(ctx.current_user(), &ana);
    }

    #[test]
    fn test_provider_gives_access() {
        let mut provider = ContextProvider::new();

        provider
            .use_cart_mut()
            .unwrap()
            .add_to_cart(shawarma());

        assert_eq!(provider.use_cart().unwrap().cart().item_count(), 1);
    }

    #[test]
    fn test_detached_provider_is_not_initialized() {
        let mut provider = ContextProvider::detached();

        assert!(matches!(provider.use_cart(), Err(CoreError::NotInitialized)));
        assert!(matches!(
            provider.use_cart_mut(),
            Err(CoreError::NotInitialized)
        ));
    }

    #[test]
    fn test_torn_down_provider_is_not_initialized() {
        let mut provider = ContextProvider::new();
        let ctx = provider.take();

        assert!(ctx.is_some());
        assert!(!provider.is_initialized());
        assert!(provider.use_cart().is_err());
    }
}
