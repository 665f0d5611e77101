//! Repository traits for database access
//!
//! Handlers depend on these traits rather than on SQL, so any store that can
//! honour the contracts below can stand in for the SQL implementations.

use crate::error::DbError;
use std::fmt::Debug;
use std::future::Future;

/// Plain CRUD over one table keyed by an integer id.
///
/// `update` and `delete` report how many rows the statement touched; callers
/// decide whether zero is an error.
pub trait Repository<T>: Send + Sync
where
    T: Clone + Debug + Send,
{
    /// Create the backing table if it does not exist yet.
    fn init_schema(&self) -> impl Future<Output = Result<(), DbError>> + Send;

    /// Insert `entity` (its `id` is ignored) and return the assigned id.
    fn create(&self, entity: T) -> impl Future<Output = Result<i64, DbError>> + Send;

    /// Every row, in id order.
    fn find_all(&self) -> impl Future<Output = Result<Vec<T>, DbError>> + Send;

    /// The row with this id, or `None`.
    fn read(&self, id: i64) -> impl Future<Output = Result<Option<T>, DbError>> + Send;

    /// Overwrite every column of row `id` with the fields of `entity`.
    fn update(&self, id: i64, entity: T) -> impl Future<Output = Result<u64, DbError>> + Send;

    /// Remove row `id`.
    fn delete(&self, id: i64) -> impl Future<Output = Result<u64, DbError>> + Send;
}

/// A trait for database repository factories
///
/// Generic over the repository type and whatever the repository is built from.
pub trait RepositoryFactory<R, C> {
    /// Create a new repository instance
    fn create_repository(&self, config: C) -> R;
}
