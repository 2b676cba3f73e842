//! Repository for the `wikis` table.

use sqlx::PgPool;
use wikiforge_core::types::DbId;

use crate::models::wiki::{CreateWiki, UpdateWiki, Wiki};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, body, created_at, updated_at";

/// Provides CRUD operations for wikis.
pub struct WikiRepo;

impl WikiRepo {
    /// Insert a new wiki owned by `user_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateWiki,
    ) -> Result<Wiki, sqlx::Error> {
        let query = format!(
            "INSERT INTO wikis (user_id, title, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wiki>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find a wiki by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Wiki>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wikis WHERE id = $1");
        sqlx::query_as::<_, Wiki>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List wikis, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Wiki>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM wikis
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Wiki>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Replace a wiki's title and body wholesale. The id is never changed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWiki,
    ) -> Result<Option<Wiki>, sqlx::Error> {
        let query = format!(
            "UPDATE wikis SET title = $2, body = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Wiki>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Delete a wiki by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM wikis WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all wikis.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM wikis")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// The most recently inserted wiki, if any.
    pub async fn last(pool: &PgPool) -> Result<Option<Wiki>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM wikis ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, Wiki>(&query).fetch_optional(pool).await
    }
}
