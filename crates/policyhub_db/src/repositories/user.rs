//! Repository for user accounts
//!
//! Users are created on registration and afterwards only have their
//! subscription columns touched; nothing here deletes them.

use crate::error::DbError;
use chrono::{DateTime, Utc};
use std::future::Future;

pub use policyhub_common::models::User;

/// Storage operations needed by authentication and the subscription lifecycle.
pub trait UserRepository: Send + Sync {
    /// Create the `users` table if it doesn't already exist.
    fn init_schema(&self) -> impl Future<Output = Result<(), DbError>> + Send;

    /// Insert a user with no subscription and `has_paid = false`.
    ///
    /// Fails with [`DbError::UniqueViolation`] when the email is taken.
    fn create_user(
        &self,
        name: &str,
        email: &str,
        password_digest: &str,
    ) -> impl Future<Output = Result<i64, DbError>> + Send;

    /// Find a user by email
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<User>, DbError>> + Send;

    /// Find a user by id
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<User>, DbError>> + Send;

    /// Set `subscription_expiry`, leaving `has_paid` alone.
    ///
    /// Returns the number of rows updated (0 when the user does not exist).
    fn set_subscription_expiry(
        &self,
        id: i64,
        expiry: Option<DateTime<Utc>>,
    ) -> impl Future<Output = Result<u64, DbError>> + Send;

    /// Mark the user as paid and set `subscription_expiry`.
    ///
    /// Returns the number of rows updated (0 when the user does not exist).
    fn record_payment(
        &self,
        id: i64,
        expiry: DateTime<Utc>,
    ) -> impl Future<Output = Result<u64, DbError>> + Send;
}
