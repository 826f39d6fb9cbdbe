//! # User Repository
//!
//! Account storage and the credential lookup behind sign-in.
//!
//! Passwords are stored and matched in plaintext. This mirrors the hosted
//! backend the storefront was built against and is not a safe design.

use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::{decode, decode_all, encode};
use crate::store::{Collection, DataStore, Filter};
use bistro_core::{NewUser, User};

#[derive(Clone, Copy)]
pub struct UserRepository<'a> {
    store: &'a dyn DataStore,
}

impl<'a> UserRepository<'a> {
    pub fn new(store: &'a dyn DataStore) -> Self {
        UserRepository { store }
    }

    /// Stores a new account and returns it with its id and `created_at`.
    ///
    /// A second account for the same email is a `DbError::UniqueViolation`
    /// on `email`.
    pub async fn insert(&self, user: &NewUser) -> DbResult<User> {
        let record = self
            .store
            .insert(Collection::Users, encode(user)?)
            .await
            .map_err(|e| match e {
                DbError::UniqueViolation { .. } => DbError::duplicate("email", &user.email),
                other => other,
            })?;
        let user: User = decode(Collection::Users, record)?;

        debug!(user_id = user.id, "User stored");
        Ok(user)
    }

    /// The account whose email and password both match exactly, if any.
    pub async fn find_by_credentials(&self, email: &str, password: &str) -> DbResult<Option<User>> {
        let records = self
            .store
            .fetch_by_filter(
                Collection::Users,
                &[Filter::eq("email", email), Filter::eq("password", password)],
            )
            .await?;

        let users: Vec<User> = decode_all(Collection::Users, records)?;
        Ok(users.into_iter().next())
    }

    pub async fn email_exists(&self, email: &str) -> DbResult<bool> {
        let records = self
            .store
            .fetch_by_filter(Collection::Users, &[Filter::eq("email", email)])
            .await?;
        Ok(!records.is_empty())
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<User> {
        match self.store.fetch_by_id(Collection::Users, id).await? {
            Some(record) => decode(Collection::Users, record),
            None => Err(DbError::not_found("User", id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    fn ana() -> NewUser {
        NewUser {
            full_name: "Ana Haddad".to_string(),
            email: "ana@bistro.test".to_string(),
            password: "secret1".to_string(),
            avatar_url: "https://ui-avatars.com/api/?name=Ana%20Haddad".to_string(),
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let user = db.users().insert(&ana()).await.unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.full_name, "Ana Haddad");
        assert!(user.created_at.is_some());
        assert_eq!(db.users().get_by_id(1).await.unwrap(), user);
    }

    #[tokio::test]
    async fn test_find_by_credentials() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.users().insert(&ana()).await.unwrap();

        let found = db
            .users()
            .find_by_credentials("ana@bistro.test", "secret1")
            .await
            .unwrap();
        assert_eq!(found.map(|u| u.id), Some(1));

        let wrong = db
            .users()
            .find_by_credentials("ana@bistro.test", "Secret1")
            .await
            .unwrap();
        assert!(wrong.is_none());
    }

    #[tokio::test]
    async fn test_email_exists() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(!db.users().email_exists("ana@bistro.test").await.unwrap());

        db.users().insert(&ana()).await.unwrap();
        assert!(db.users().email_exists("ana@bistro.test").await.unwrap());
    }

    #[tokio::test]
    async fn test_second_account_for_email_is_rejected() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.users().insert(&ana()).await.unwrap();

        let mut again = ana();
        again.full_name = "Ana H.".to_string();
        let err = db.users().insert(&again).await.unwrap_err();

        assert!(matches!(
            &err,
            DbError::UniqueViolation { field, value } if field == "email" && value == "ana@bistro.test"
        ));
        assert_eq!(db.count(Collection::Users).await.unwrap(), 1);
    }
}
