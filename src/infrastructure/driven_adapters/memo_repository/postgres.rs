//! PostgreSQL Memo Repository Implementation
//!
//! Implements the MemoRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::{MemoListQuery, MemoRepository};
use crate::domain::models::memo::{Memo, MemoId, MemoRevision};
use crate::shared::errors::RepositoryError;

/// Database row representation for memos table
#[derive(Debug, sqlx::FromRow)]
struct MemoRow {
    id: Uuid,
    body: String,
    tags: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MemoRow> for Memo {
    fn from(row: MemoRow) -> Self {
        Memo::restore(
            MemoId::from_uuid(row.id),
            row.body,
            row.tags,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of MemoRepository
pub struct PostgresMemoRepository {
    pool: PgPool,
}

impl PostgresMemoRepository {
    /// Create a new PostgresMemoRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemoRepository for PostgresMemoRepository {
    async fn create(&self, memo: &Memo) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO memos (id, body, tags, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(memo.id().as_uuid())
        .bind(memo.body())
        .bind(memo.tags())
        .bind(memo.created_at())
        .bind(memo.updated_at())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list(&self, query: &MemoListQuery) -> Result<(Vec<Memo>, i64), RepositoryError> {
        let rows = sqlx::query_as::<_, MemoRow>(
            r#"
            SELECT id, body, tags, created_at, updated_at
            FROM memos
            WHERE ($1::text IS NULL OR $1 = ANY(tags))
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.tag.as_deref())
        .bind(query.limit)
        .bind(query.offset)
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM memos
            WHERE ($1::text IS NULL OR $1 = ANY(tags))
            "#,
        )
        .bind(query.tag.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Memo::from).collect(), total))
    }

    async fn find_by_id(&self, id: &MemoId) -> Result<Option<Memo>, RepositoryError> {
        let row = sqlx::query_as::<_, MemoRow>(
            r#"
            SELECT id, body, tags, created_at, updated_at
            FROM memos
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Memo::from))
    }

    async fn update(&self, revision: &MemoRevision) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE memos
            SET body = $2,
                tags = $3,
                updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(revision.id.as_uuid())
        .bind(&revision.body)
        .bind(&revision.tags)
        .bind(revision.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: &MemoId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM memos WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
