//! Factory for creating SQL repositories over a shared client

use crate::repositories::{SqlMemberRepository, SqlPolicyRepository, SqlUserRepository};
use crate::{DbClient, RepositoryFactory};

/// Builds every SQL repository from one [`DbClient`].
///
/// Cloning a `DbClient` clones a pool handle, so all repositories share the
/// same connections.
#[derive(Debug, Clone, Default)]
pub struct SqlRepositoryFactory;

impl SqlRepositoryFactory {
    pub fn new() -> Self {
        Self
    }
}

impl RepositoryFactory<SqlUserRepository, DbClient> for SqlRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlUserRepository {
        SqlUserRepository::new(db_client)
    }
}

impl RepositoryFactory<SqlMemberRepository, DbClient> for SqlRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlMemberRepository {
        SqlMemberRepository::new(db_client)
    }
}

impl RepositoryFactory<SqlPolicyRepository, DbClient> for SqlRepositoryFactory {
    fn create_repository(&self, db_client: DbClient) -> SqlPolicyRepository {
        SqlPolicyRepository::new(db_client)
    }
}
