//! # Food Repository
//!
//! Dishes for the home, category and dish-details screens.

use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{decode, decode_all, encode};
use crate::store::{Collection, DataStore, Filter};
use bistro_core::Food;

#[derive(Clone, Copy)]
pub struct FoodRepository<'a> {
    store: &'a dyn DataStore,
}

impl<'a> FoodRepository<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        FoodRepository { store }
    }

    /// Every dish in the catalog.
    pub async fn list(&self) -> DbResult<Vec<Food>> {
        let records = self.store.fetch_all(Collection::Foods).await?;
        decode_all(Collection::Foods, records)
    }

    /// Dishes filed under one category.
    pub async fn by_category(&self, category_id: i64) -> DbResult<Vec<Food>> {
        let records = self
            .store
            .fetch_by_filter(Collection::Foods, &[Filter::eq("category_id", category_id)])
            .await?;

        debug!(category_id, count = records.len(), "Foods by category");
        decode_all(Collection::Foods, records)
    }

    /// The dish with this id.
    ///
    /// ## Errors
    /// `DbError::NotFound` when the catalog has no such dish.
    pub async fn get_by_id(&self, dish_id: i64) -> DbResult<Food> {
        match self.store.fetch_by_id(Collection::Foods, dish_id).await? {
            Some(record) => decode(Collection::Foods, record),
            None => Err(DbError::not_found("Food", dish_id)),
        }
    }

    pub async fn insert(&self, food: &Food) -> DbResult<Food> {
        let record = self.store.insert(Collection::Foods, encode(food)?).await?;
        decode(Collection::Foods, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use bistro_core::Money;

    fn dish(id: i64, name: &str, category_id: i64, cents: i64) -> Food {
        Food {
            id,
            name: name.to_string(),
            description: String::new(),
            image_url: String::new(),
            price: Some(Money::from_cents(cents)),
            rating: Some(4.0),
            nutritional_info: None,
            category_id: Some(category_id),
        }
    }

    #[tokio::test]
    async fn test_food_queries() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let foods = db.foods();

        foods.insert(&dish(1, "Lentil Soup", 1, 599)).await.unwrap();
        foods.insert(&dish(2, "Mixed Grill", 2, 1899)).await.unwrap();
        foods.insert(&dish(3, "Freekeh Soup", 1, 649)).await.unwrap();

        assert_eq!(foods.list().await.unwrap().len(), 3);

        let soups = foods.by_category(1).await.unwrap();
        let names: Vec<&str> = soups.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Lentil Soup", "Freekeh Soup"]);

        let grill = foods.get_by_id(2).await.unwrap();
        assert_eq!(grill.price, Some(Money::from_cents(1899)));
    }

    #[tokio::test]
    async fn test_missing_dish_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = db.foods().get_by_id(404).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
