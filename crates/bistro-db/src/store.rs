//! # DataStore
//!
//! The generic select/insert surface the storefront talks to, and its
//! SQLite implementation on [`Database`].
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  records                                                                │
//! │  ┌────────────┬────┬──────────────────────────────────┬──────────────┐ │
//! │  │ collection │ id │ body (JSON)                      │ created_at   │ │
//! │  ├────────────┼────┼──────────────────────────────────┼──────────────┤ │
//! │  │ foods      │ 1  │ {"id":1,"name":"Falafel",..}     │ 2026-01-02.. │ │
//! │  │ foods      │ 2  │ {"id":2,"name":"Hummus",..}      │ 2026-01-02.. │ │
//! │  │ users      │ 1  │ {"id":1,"email":"ana@..",..}     │ 2026-01-03.. │ │
//! │  └────────────┴────┴──────────────────────────────────┴──────────────┘ │
//! │                                                                         │
//! │  fetch_by_filter(Foods, [category_id = 2])                             │
//! │    → WHERE collection = 'foods'                                        │
//! │        AND json_extract(body, '$.category_id') = 2                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids are per collection. `insert` assigns `max(id) + 1` unless the record
//! already carries a positive id, and stamps `created_at` when it is missing.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::{QueryBuilder, Sqlite};
use std::fmt;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::pool::Database;

/// A record body as stored: a JSON object.
pub type Record = Value;

// =============================================================================
// Collections and Filters
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Foods,
    Categories,
    Reviews,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Users,
        Collection::Foods,
        Collection::Categories,
        Collection::Reviews,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Foods => "foods",
            Collection::Categories => "categories",
            Collection::Reviews => "reviews",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

/// Field-equality filter. Several filters are ANDed together.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: FilterValue,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Filter {
            field: field.into(),
            value: value.into(),
        }
    }
}

fn is_identifier(field: &str) -> bool {
    let mut chars = field.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

// =============================================================================
// DataStore Trait
// =============================================================================

/// Generic collection store.
///
/// Object safe, so flows hold it as `Arc<dyn DataStore>` and tests can
/// swap the backend.
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Every record in the collection, in id order.
    async fn fetch_all(&self, collection: Collection) -> DbResult<Vec<Record>>;

    /// The record with this id, if any.
    async fn fetch_by_id(&self, collection: Collection, id: i64) -> DbResult<Option<Record>>;

    /// Records matching every filter, in id order.
    async fn fetch_by_filter(
        &self,
        collection: Collection,
        filters: &[Filter],
    ) -> DbResult<Vec<Record>>;

    /// Stores the record and returns it as stored (with `id` and `created_at`).
    async fn insert(&self, collection: Collection, record: Record) -> DbResult<Record>;
}

fn parse_body(collection: Collection, body: &str) -> DbResult<Record> {
    serde_json::from_str(body).map_err(|e| DbError::decode(collection.as_str(), e))
}

#[async_trait]
impl DataStore for Database {
    async fn fetch_all(&self, collection: Collection) -> DbResult<Vec<Record>> {
        let bodies: Vec<String> =
            sqlx::query_scalar("SELECT body FROM records WHERE collection = ?1 ORDER BY id")
                .bind(collection.as_str())
                .fetch_all(self.pool())
                .await?;

        debug!(collection = %collection, count = bodies.len(), "Fetched records");
        bodies.iter().map(|b| parse_body(collection, b)).collect()
    }

    async fn fetch_by_id(&self, collection: Collection, id: i64) -> DbResult<Option<Record>> {
        let body: Option<String> =
            sqlx::query_scalar("SELECT body FROM records WHERE collection = ?1 AND id = ?2")
                .bind(collection.as_str())
                .bind(id)
                .fetch_optional(self.pool())
                .await?;

        body.map(|b| parse_body(collection, &b)).transpose()
    }

    async fn fetch_by_filter(
        &self,
        collection: Collection,
        filters: &[Filter],
    ) -> DbResult<Vec<Record>> {
        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT body FROM records WHERE collection = ");
        qb.push_bind(collection.as_str());

        for filter in filters {
            if !is_identifier(&filter.field) {
                return Err(DbError::InvalidFilter(filter.field.clone()));
            }
            qb.push(" AND json_extract(body, '$.");
            qb.push(&filter.field);
            qb.push("') = ");
            match &filter.value {
                FilterValue::Int(v) => qb.push_bind(*v),
                FilterValue::Text(v) => qb.push_bind(v.clone()),
            };
        }
        qb.push(" ORDER BY id");

        let bodies = qb
            .build_query_scalar::<String>()
            .fetch_all(self.pool())
            .await?;

        debug!(collection = %collection, filters = filters.len(), count = bodies.len(), "Filtered records");
        bodies.iter().map(|b| parse_body(collection, b)).collect()
    }

    async fn insert(&self, collection: Collection, record: Record) -> DbResult<Record> {
        let Value::Object(mut body) = record else {
            return Err(DbError::InvalidRecord(format!(
                "{} record must be a JSON object",
                collection
            )));
        };

        let mut tx = self.pool().begin().await?;

        let id = match body.get("id").and_then(Value::as_i64) {
            Some(id) if id > 0 => id,
            _ => {
                sqlx::query_scalar::<_, i64>(
                    "SELECT COALESCE(MAX(id), 0) + 1 FROM records WHERE collection = ?1",
                )
                .bind(collection.as_str())
                .fetch_one(&mut *tx)
                .await?
            }
        };

        let created_at = match body.get("created_at").and_then(Value::as_str) {
            Some(ts) => ts.to_string(),
            None => Utc::now().to_rfc3339(),
        };

        body.insert("id".to_string(), Value::from(id));
        body.insert("created_at".to_string(), Value::from(created_at.clone()));

        let record = Value::Object(body);
        let text = serde_json::to_string(&record)
            .map_err(|e| DbError::InvalidRecord(e.to_string()))?;

        sqlx::query("INSERT INTO records (collection, id, body, created_at) VALUES (?1, ?2, ?3, ?4)")
            .bind(collection.as_str())
            .bind(id)
            .bind(text)
            .bind(created_at)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        debug!(collection = %collection, id, "Record inserted");
        Ok(record)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
