//! # Commands Module
//!
//! Every operation the mobile screens invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── auth.rs     ◄─── Sign in, sign up, sign out
//! ├── catalog.rs  ◄─── Categories, dishes, dish details
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── saved.rs    ◄─── Saved-items list
//! ├── payment.rs  ◄─── Checkout and simulated payment
//! ├── review.rs   ◄─── Post-order review
//! └── profile.rs  ◄─── Profile screen
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Validate input          (bistro_core::validation)                  │
//! │  2. Await the store         (StoreState → bistro-db)                   │
//! │  3. Mutate the context      (ContextProvider → AppContext, sync)       │
//! │  4. Navigate                (&mut dyn Router)                          │
//! │  5. Return a serializable response or ApiError                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the context
//! pub fn get_cart(ctx: &ContextProvider) -> Result<CartResponse, ApiError>
//!
//! // Needs store, context and router
//! pub async fn add_dish_to_cart(store: &StoreState, ctx: &mut ContextProvider,
//!                               router: &mut dyn Router, dish_id: i64, quantity: u32)
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod payment;
pub mod profile;
pub mod review;
pub mod saved;
