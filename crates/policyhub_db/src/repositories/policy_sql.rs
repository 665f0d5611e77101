//! SQL implementation of the policy repository

use crate::error::DbError;
use crate::repositories::columns::{bind_loose, loose_value, AnyQuery};
use crate::repository::Repository;
use crate::DbClient;
use policyhub_common::models::Policy;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

const SELECT_COLUMNS: &str =
    "SELECT id, member_id, plan_type, cover_level, premium, start_date, status FROM policies";

/// SQL implementation of the policy repository
#[derive(Debug, Clone)]
pub struct SqlPolicyRepository {
    db_client: DbClient,
}

impl SqlPolicyRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn policy_from_row(row: &AnyRow) -> Result<Policy, DbError> {
    Ok(Policy {
        id: Some(row.try_get("id")?),
        member_id: loose_value(row, "member_id")?,
        plan_type: loose_value(row, "plan_type")?,
        cover_level: loose_value(row, "cover_level")?,
        premium: loose_value(row, "premium")?,
        start_date: loose_value(row, "start_date")?,
        status: loose_value(row, "status")?,
    })
}

// Binds the six policy fields in column order, starting at $1.
fn bind_policy(query: AnyQuery<'_>, policy: Policy) -> AnyQuery<'_> {
    [
        policy.member_id,
        policy.plan_type,
        policy.cover_level,
        policy.premium,
        policy.start_date,
        policy.status,
    ]
    .into_iter()
    .fold(query, bind_loose)
}

impl Repository<Policy> for SqlPolicyRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing policies schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS policies (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                member_id,
                plan_type,
                cover_level,
                premium,
                start_date,
                status,
                FOREIGN KEY(member_id) REFERENCES members(id)
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Policies schema initialized successfully");
        Ok(())
    }

    async fn create(&self, policy: Policy) -> Result<i64, DbError> {
        debug!("Creating policy for member {:?}", policy.member_id);

        let query = sqlx::query(
            r#"
            INSERT INTO policies (member_id, plan_type, cover_level, premium, start_date, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        );
        let row = bind_policy(query, policy)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert policy: {}", e);
                DbError::from_query(e)
            })?;

        Ok(row.try_get("id")?)
    }

    async fn find_all(&self) -> Result<Vec<Policy>, DbError> {
        debug!("Finding all policies");

        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list policies: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(policy_from_row).collect()
    }

    async fn read(&self, id: i64) -> Result<Option<Policy>, DbError> {
        debug!("Finding policy {}", id);

        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find policy: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(policy_from_row).transpose()
    }

    async fn update(&self, id: i64, policy: Policy) -> Result<u64, DbError> {
        debug!("Updating policy {}", id);

        let query = sqlx::query(
            r#"
            UPDATE policies
            SET member_id = $1, plan_type = $2, cover_level = $3, premium = $4,
                start_date = $5, status = $6
            WHERE id = $7
            "#,
        );
        let result = bind_policy(query, policy)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update policy: {}", e);
                DbError::from_query(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        debug!("Deleting policy {}", id);

        let result = sqlx::query("DELETE FROM policies WHERE id = $1")
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete policy: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
