//! PostgreSQL implementation of the link registry.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRegistry;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

#[derive(sqlx::FromRow)]
struct ShortLinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    click_count: i64,
    created_at: DateTime<Utc>,
}

impl From<ShortLinkRow> for ShortLink {
    fn from(r: ShortLinkRow) -> Self {
        ShortLink::new(r.id, r.short_code, r.original_url, r.click_count, r.created_at)
    }
}

/// PostgreSQL registry for short links.
///
/// Code uniqueness is enforced by the `short_links_short_code_key`
/// constraint, and click counting is a single `UPDATE ... + 1` statement.
/// URL lookups go through the `md5(original_url)` expression index.
pub struct PgLinkRegistry {
    pool: Arc<PgPool>,
}

impl PgLinkRegistry {
    /// Creates a new registry with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRegistry for PgLinkRegistry {
    async fn find_by_url(&self, url: &str) -> Result<Option<ShortLink>, AppError> {
        // Oldest first: if a creation race left duplicates, the first code wins.
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, short_code, original_url, click_count, created_at
            FROM short_links
            WHERE md5(original_url) = md5($1) AND original_url = $1
            ORDER BY created_at, id
            LIMIT 1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, short_code, original_url, click_count, created_at
            FROM short_links
            WHERE short_code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(ShortLink::from))
    }

    async fn insert(&self, code: &str, url: &str) -> Result<ShortLink, AppError> {
        let row = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            INSERT INTO short_links (short_code, original_url)
            VALUES ($1, $2)
            RETURNING id, short_code, original_url, click_count, created_at
            "#,
        )
        .bind(code)
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_code(&e) {
                AppError::conflict("Short code already exists", json!({ "code": code }))
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE short_links SET click_count = click_count + 1 WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, ShortLinkRow>(
            r#"
            SELECT id, short_code, original_url, click_count, created_at
            FROM short_links
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(ShortLink::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM short_links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
