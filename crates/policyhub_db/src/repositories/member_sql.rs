//! SQL implementation of the member repository

use crate::error::DbError;
use crate::repositories::columns::{bind_loose, loose_value};
use crate::repository::Repository;
use crate::DbClient;
use policyhub_common::models::Member;
use sqlx::any::AnyRow;
use sqlx::Row;
use tracing::{debug, error, info};

/// SQL implementation of the member repository
#[derive(Debug, Clone)]
pub struct SqlMemberRepository {
    db_client: DbClient,
}

impl SqlMemberRepository {
    pub fn new(db_client: DbClient) -> Self {
        Self { db_client }
    }
}

fn member_from_row(row: &AnyRow) -> Result<Member, DbError> {
    Ok(Member {
        id: Some(row.try_get("id")?),
        name: loose_value(row, "name")?,
        id_number: loose_value(row, "id_number")?,
        address: loose_value(row, "address")?,
    })
}

impl Repository<Member> for SqlMemberRepository {
    async fn init_schema(&self) -> Result<(), DbError> {
        debug!("Initializing members schema");

        let query = r#"
            CREATE TABLE IF NOT EXISTS members (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name,
                id_number UNIQUE NOT NULL,
                address
            )
        "#;

        self.db_client.execute(query).await?;

        info!("Members schema initialized successfully");
        Ok(())
    }

    async fn create(&self, member: Member) -> Result<i64, DbError> {
        debug!("Creating member with id number {:?}", member.id_number);

        let query = sqlx::query(
            "INSERT INTO members (name, id_number, address) VALUES ($1, $2, $3) RETURNING id",
        );
        let query = bind_loose(query, member.name);
        let query = bind_loose(query, member.id_number);
        let row = bind_loose(query, member.address)
            .fetch_one(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to insert member: {}", e);
                DbError::from_query(e)
            })?;

        Ok(row.try_get("id")?)
    }

    async fn find_all(&self) -> Result<Vec<Member>, DbError> {
        debug!("Finding all members");

        let rows = sqlx::query("SELECT id, name, id_number, address FROM members ORDER BY id")
            .fetch_all(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to list members: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        rows.iter().map(member_from_row).collect()
    }

    async fn read(&self, id: i64) -> Result<Option<Member>, DbError> {
        debug!("Finding member {}", id);

        let row = sqlx::query("SELECT id, name, id_number, address FROM members WHERE id = $1")
            .bind(id)
            .fetch_optional(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to find member: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        row.as_ref().map(member_from_row).transpose()
    }

    async fn update(&self, id: i64, member: Member) -> Result<u64, DbError> {
        debug!("Updating member {}", id);

        let query = sqlx::query(
            "UPDATE members SET name = $1, id_number = $2, address = $3 WHERE id = $4",
        );
        let query = bind_loose(query, member.name);
        let query = bind_loose(query, member.id_number);
        let result = bind_loose(query, member.address)
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to update member: {}", e);
                DbError::from_query(e)
            })?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i64) -> Result<u64, DbError> {
        debug!("Deleting member {}", id);

        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(self.db_client.pool())
            .await
            .map_err(|e| {
                error!("Failed to delete member: {}", e);
                DbError::QueryError(e.to_string())
            })?;

        Ok(result.rows_affected())
    }
}
