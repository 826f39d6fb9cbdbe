//! # Store State
//!
//! Wraps the `DataStore` the commands read and write through.

use std::sync::Arc;

use bistro_db::{
    CategoryRepository, DataStore, Database, FoodRepository, ReviewRepository, UserRepository,
};

/// Shared handle on the backend store.
///
/// Holding `dyn DataStore` lets the flows run against SQLite in the app and
/// against any other implementation in tests.
#[derive(Clone)]
pub struct StoreState {
    store: Arc<dyn DataStore>,
}

impl StoreState {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        StoreState { store }
    }

    pub fn inner(&self) -> &dyn DataStore {
        self.store.as_ref()
    }

    pub fn foods(&self) -> FoodRepository<'_> {
        FoodRepository::new(self.inner())
    }

    pub fn categories(&self) -> CategoryRepository<'_> {
        CategoryRepository::new(self.inner())
    }

    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(self.inner())
    }

    pub fn reviews(&self) -> ReviewRepository<'_> {
        ReviewRepository::new(self.inner())
    }
}

impl From<Database> for StoreState {
    fn from(db: Database) -> Self {
        StoreState::new(Arc::new(db))
    }
}

impl std::fmt::Debug for StoreState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreState").finish_non_exhaustive()
    }
}
