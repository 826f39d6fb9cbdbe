//! # Repository Module
//!
//! Typed access to each collection on top of any [`DataStore`].
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Storefront command                                                     │
//! │       │                                                                 │
//! │       │  FoodRepository::new(store).by_category(2)                     │
//! │       ▼                                                                 │
//! │  FoodRepository                                                        │
//! │  ├── list()                                                            │
//! │  ├── by_category(category_id)                                          │
//! │  └── get_by_id(dish_id)                                                │
//! │       │                                                                 │
//! │       │  fetch_by_filter(Foods, [category_id = 2])                     │
//! │       ▼                                                                 │
//! │  dyn DataStore  ──► JSON records ──► serde ──► Food                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`FoodRepository`] - Dishes
//! - [`CategoryRepository`] - Dish categories
//! - [`UserRepository`] - Accounts and credential lookup
//! - [`ReviewRepository`] - Post-order reviews

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DbError, DbResult};
use crate::store::{Collection, Record};

pub mod category;
pub mod food;
pub mod review;
pub mod user;

pub use category::CategoryRepository;
pub use food::FoodRepository;
pub use review::ReviewRepository;
pub use user::UserRepository;

pub(crate) fn decode<T: DeserializeOwned>(collection: Collection, record: Record) -> DbResult<T> {
    serde_json::from_value(record).map_err(|e| DbError::decode(collection.as_str(), e))
}

pub(crate) fn decode_all<T: DeserializeOwned>(
    collection: Collection,
    records: Vec<Record>,
) -> DbResult<Vec<T>> {
    records.into_iter().map(|r| decode(collection, r)).collect()
}

pub(crate) fn encode<T: Serialize>(value: &T) -> DbResult<Record> {
    serde_json::to_value(value).map_err(|e| DbError::InvalidRecord(e.to_string()))
}
