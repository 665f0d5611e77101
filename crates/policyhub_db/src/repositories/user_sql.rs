//! SQL implementation of the user repository

use crate::error::DbError;
use crate::repositories::columns::nullable;
use crate::repositories::timestamp::{from_db_timestamp, to_db_timestamp};
use crate::repositories::user::{User, UserRepository};
use crate::DbClient;
use chrono::{DateTime, Utc};
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the user repository
#[derive(Debug, Clone)]
pub struct SqlUserRepository {
    db_client: DbClient,
}

impl SqlUserRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

// Manual row mapping: the Any driver can't decode DateTime<Utc>, bool or NULL directly
fn user_from_row(row: &AnyRow) -> Result<User, DbError> {
    let expiry: Option<String> = nullable(row, "subscription_expiry")?;
    let has_paid: i64 = row.try_get("has_paid")?;
    Ok(User {
        id: row.try_get("id")?,
        name: nullable(row, "name")?,
        email: row.try_get("email")?,
        password: row.try_get("password")?,
        subscription_expiry: expiry.as_deref().and_then(from_db_timestamp),
        has_paid: has_paid != 0,
    })
}

impl UserRepository for SqlUserRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing users schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                email TEXT UNIQUE NOT NULL,
                password TEXT NOT NULL,
                subscription_expiry TEXT,
                has_paid INTEGER NOT NULL DEFAULT 0
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Users schema initialized successfully");
        Ok(())
    }

    async fn create_user(
        &self,
        name: &str,
        email: &str,
        password_digest: &str,
    ) -> Result<i64, DbError> {
        debug!("Creating user: {}", email);

        let query = r#"
            INSERT INTO users (name, email, password, has_paid)
            VALUES ($1, $2, $3, 0)
            RETURNING id
        "#;

        let row = sqlx::query(query)
            .bind(name)
            .bind(email)
            .bind(password_digest)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert user: {}", e);
                DbError::from_query(e)
            })?;

        let id: i64 = row.try_get("id")?;
        info!("User {} created with id {}", email, id);
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        debug!("Finding user by email: {}", email);

        let query = r#"
            SELECT id, name, email, password, subscription_expiry, has_paid
            FROM users
            WHERE email = $1
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find user by email: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbError> {
        debug!("Finding user by id: {}", id);

        let query = r#"
            SELECT id, name, email, password, subscription_expiry, has_paid
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find user by id: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(user_from_row).transpose()
    }

    async fn set_subscription_expiry(
        &self,
        id: i64,
        expiry: Option<DateTime<Utc>>,
    ) -> Result<u64, DbError> {
        debug!("Setting subscription expiry for user {} to {:?}", id, expiry);

        let result = sqlx::query("UPDATE users SET subscription_expiry = $1 WHERE id = $2")
            .bind(expiry.map(to_db_timestamp))
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to set subscription expiry: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }

    async fn record_payment(&self, id: i64, expiry: DateTime<Utc>) -> Result<u64, DbError> {
        debug!("Recording payment for user {} until {}", id, expiry);

        let result =
            sqlx::query("UPDATE users SET has_paid = 1, subscription_expiry = $1 WHERE id = $2")
                .bind(to_db_timestamp(expiry))
                .bind(id)
                .execute(self.db_client.pool())
                .await
                .map_err(|e| {
                    error!("Failed to record payment: {}", e);
                    DbError::QueryError(e.to_string())
                })?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    async fn repository() -> SqlUserRepository {
        let client = DbClient::from_url("sqlite::memory:").await.unwrap();
        let repo = SqlUserRepository::new(client);
        repo.init_schema().await.unwrap();
        repo
    }

    #[tokio::test]
    async fn new_users_start_unpaid_without_expiry() {
        let repo = repository().await;
        let id = repo.create_user("A", "a@x.com", "digest").await.unwrap();

        let user = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.name.as_deref(), Some("A"));
        assert_eq!(user.password, "digest");
        assert_eq!(user.subscription_expiry, None);
        assert!(!user.has_paid);
    }

    #[tokio::test]
    async fn duplicate_email_is_a_unique_violation() {
        let repo = repository().await;
        let first = repo.create_user("A", "a@x.com", "one").await.unwrap();

        let err = repo.create_user("B", "a@x.com", "two").await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation(_)), "got {err:?}");

        let kept = repo.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(kept.id, first);
        assert_eq!(kept.password, "one");
    }

    #[tokio::test]
    async fn expiry_round_trips_through_text_column() {
        let repo = repository().await;
        let id = repo.create_user("A", "a@x.com", "digest").await.unwrap();
        let expiry = Utc::now() + Duration::days(30);

        assert_eq!(repo.set_subscription_expiry(id, Some(expiry)).await.unwrap(), 1);
        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        let delta = stored.subscription_expiry.unwrap() - expiry;
        assert!(delta.num_milliseconds().abs() <= 1);

        assert_eq!(repo.set_subscription_expiry(id, None).await.unwrap(), 1);
        let cleared = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(cleared.subscription_expiry, None);
    }

    #[tokio::test]
    async fn record_payment_sets_flag_and_expiry() {
        let repo = repository().await;
        let id = repo.create_user("A", "a@x.com", "digest").await.unwrap();
        let expiry = Utc::now() + Duration::days(30);

        assert_eq!(repo.record_payment(id, expiry).await.unwrap(), 1);
        let user = repo.find_by_id(id).await.unwrap().unwrap();
        assert!(user.has_paid);
        assert!(user.subscription_expiry.is_some());
    }

    #[tokio::test]
    async fn updates_for_unknown_users_touch_nothing() {
        let repo = repository().await;
        assert_eq!(repo.record_payment(404, Utc::now()).await.unwrap(), 0);
        assert_eq!(repo.set_subscription_expiry(404, None).await.unwrap(), 0);
        assert!(repo.find_by_id(404).await.unwrap().is_none());
        assert!(repo.find_by_email("nobody@x.com").await.unwrap().is_none());
    }
}
