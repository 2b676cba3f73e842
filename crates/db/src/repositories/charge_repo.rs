//! Repository for the `charges` table.

use sqlx::PgPool;
use wikiforge_core::types::DbId;

use crate::models::charge::{Charge, CreateCharge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, amount_cents, description, created_at";

/// Provides insert and lookup operations for charges.
pub struct ChargeRepo;

impl ChargeRepo {
    /// Record a new charge, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCharge) -> Result<Charge, sqlx::Error> {
        let query = format!(
            "INSERT INTO charges (user_id, amount_cents, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Charge>(&query)
            .bind(input.user_id)
            .bind(input.amount_cents)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Count charges recorded for a user.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM charges WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
