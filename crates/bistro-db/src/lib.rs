//! # bistro-db: Data Store for the Bistro Storefront
//!
//! The collaborator every storefront flow awaits before touching state: a
//! generic collection store (`fetch_all`, `fetch_by_id`, `fetch_by_filter`,
//! `insert`) and a SQLite implementation of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bistro Storefront Data Flow                      │
//! │                                                                         │
//! │  Storefront command (sign_in, category_foods, submit_review)           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     bistro-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  Repositories │    │   DataStore   │    │  Migrations  │  │   │
//! │  │   │               │    │   (store.rs)  │    │  (embedded)  │  │   │
//! │  │   │ FoodRepo      │───►│ dyn DataStore │    │ 001_init.sql │  │   │
//! │  │   │ UserRepo      │    │      ▲        │    │              │  │   │
//! │  │   │ ReviewRepo    │    │  Database     │    │              │  │   │
//! │  │   │ CategoryRepo  │    │  (pool.rs)    │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   <data dir>/bistro/bistro.db                                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - `DataStore` trait, collections, filters, SQLite impl
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Typed repositories (foods, categories, users, reviews)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bistro_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/bistro.db")).await?;
//!
//! let soups = db.foods().by_category(1).await?;
//! let ana = db.users().find_by_credentials("ana@bistro.test", "secret1").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use store::{Collection, DataStore, Filter, FilterValue, Record};

pub use repository::{CategoryRepository, FoodRepository, ReviewRepository, UserRepository};
