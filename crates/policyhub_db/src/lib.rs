//! Relational store access for PolicyHub
//!
//! Provides a pooled [`DbClient`] on top of SQLx's `Any` driver and one
//! repository per table (`users`, `members`, `policies`). SQLite is the
//! default backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use policyhub_db::{DbClient, Repository, SqlMemberRepository};
//!
//! async fn setup_db() -> Result<SqlMemberRepository, Box<dyn std::error::Error>> {
//!     let db_client = DbClient::from_url("sqlite::memory:").await?;
//!     let members = SqlMemberRepository::new(db_client);
//!     members.init_schema().await?;
//!     Ok(members)
//! }
//! ```

pub mod client;
pub mod error;
pub mod repositories;
pub mod repository;

pub use client::DbClient;
pub use error::DbError;
pub use repository::{Repository, RepositoryFactory};

pub use repositories::{
    SqlMemberRepository, SqlPolicyRepository, SqlRepositoryFactory, SqlUserRepository, User,
    UserRepository,
};
