//! Error types for the database client

use policyhub_common::{store_error, PolicyHubError};
use thiserror::Error;

/// Errors that can occur when working with the database client
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SQLx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// Error with the database configuration
    #[error("Database configuration error: {0}")]
    ConfigError(String),

    /// Error with database URL parsing
    #[error("Database URL error: {0}")]
    UrlError(String),

    /// Error with database pool creation
    #[error("Database pool error: {0}")]
    PoolError(String),

    /// Error with database query
    #[error("Database query error: {0}")]
    QueryError(String),

    /// A UNIQUE constraint rejected the statement
    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),
}

impl DbError {
    /// Classifies a statement failure, singling out unique-constraint violations.
    pub fn from_query(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.is_unique_violation()
                    // the Any driver does not always carry the error kind through
                    || db_err.message().contains("UNIQUE constraint failed") =>
            {
                DbError::UniqueViolation(db_err.message().to_string())
            }
            _ => DbError::QueryError(err.to_string()),
        }
    }
}

/// Every store failure is a 500 unless a handler maps it more precisely first.
impl From<DbError> for PolicyHubError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::SqlxError(e) => store_error(e),
            DbError::QueryError(msg) | DbError::UniqueViolation(msg) => store_error(msg),
            DbError::ConfigError(msg) => store_error(format!("configuration: {msg}")),
            DbError::UrlError(msg) => store_error(format!("url: {msg}")),
            DbError::PoolError(msg) => store_error(format!("pool: {msg}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_carry_a_single_prefix() {
        let err: PolicyHubError = DbError::SqlxError(sqlx::Error::RowNotFound).into();
        let message = err.to_string();
        assert!(message.starts_with("Database error: "), "got {message}");
        assert_eq!(message.matches("Database error").count(), 1, "got {message}");

        let err: PolicyHubError = DbError::PoolError("timed out".to_string()).into();
        assert_eq!(err.to_string(), "Database error: pool: timed out");
    }
}
