//! # Review Repository

use tracing::debug;

use crate::error::DbResult;
use crate::repository::{decode, decode_all, encode};
use crate::store::{Collection, DataStore, Filter};
use bistro_core::Review;

#[derive(Clone, Copy)]
pub struct ReviewRepository<'a> {
    store: &'a dyn DataStore,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        ReviewRepository { store }
    }

    /// Stores the review; the returned copy carries its id and timestamp.
    pub async fn insert(&self, review: &Review) -> DbResult<Review> {
        let record = self
            .store
            .insert(Collection::Reviews, encode(review)?)
            .await?;
        let review: Review = decode(Collection::Reviews, record)?;

        debug!(review_id = ?review.id, user_id = review.user_id, "Review stored");
        Ok(review)
    }

    /// Reviews written by one user, oldest first.
    pub async fn by_user(&self, user_id: i64) -> DbResult<Vec<Review>> {
        let records = self
            .store
            .fetch_by_filter(Collection::Reviews, &[Filter::eq("user_id", user_id)])
            .await?;
        decode_all(Collection::Reviews, records)
    }
}
