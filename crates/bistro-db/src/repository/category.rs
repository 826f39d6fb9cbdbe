//! # Category Repository

use crate::error::{DbError, DbResult};
use crate::repository::{decode, decode_all, encode};
use crate::store::{Collection, DataStore};
use bistro_core::Category;

#[derive(Clone, Copy)]
pub struct CategoryRepository<'a> {
    store: &'a dyn DataStore,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        CategoryRepository { store }
    }

    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let records = self.store.fetch_all(Collection::Categories).await?;
        decode_all(Collection::Categories, records)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Category> {
        match self.store.fetch_by_id(Collection::Categories, id).await? {
            Some(record) => decode(Collection::Categories, record),
            None => Err(DbError::not_found("Category", id)),
        }
    }

    pub async fn insert(&self, category: &Category) -> DbResult<Category> {
        let record = self
            .store
            .insert(Collection::Categories, encode(category)?)
            .await?;
        decode(Collection::Categories, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_category_round_trip() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let categories = db.categories();

        categories
            .insert(&Category {
                id: 4,
                name: "Desserts".to_string(),
                description: "Sweet things".to_string(),
                image_url: String::new(),
            })
            .await
            .unwrap();

        assert_eq!(categories.list().await.unwrap().len(), 1);
        assert_eq!(categories.get_by_id(4).await.unwrap().name, "Desserts");
        assert!(categories.get_by_id(5).await.is_err());
    }
}
