//! # State Module
//!
//! The three pieces of state the commands are handed.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │  StoreState  │  │ ContextProvider  │  │   StoreConfig    │          │
//! │  │              │  │  (bistro-core)   │  │                  │          │
//! │  │ Arc<dyn      │  │  AppContext:     │  │  store_name      │          │
//! │  │  DataStore>  │  │  cart, saved,    │  │  delivery info   │          │
//! │  │              │  │  session         │  │  currency        │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  • StoreState: shared, the pool inside is thread-safe                  │
//! │  • ContextProvider: borrowed `&mut` by the command that mutates it     │
//! │  • StoreConfig: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the pieces it needs.

mod config;
mod store;

pub use config::{StoreConfig, ALL_CATEGORY_ID};
pub use store::StoreState;
