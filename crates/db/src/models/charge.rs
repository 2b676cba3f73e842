//! Charge model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use wikiforge_core::types::{DbId, Timestamp};

/// A row from the `charges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Charge {
    pub id: DbId,
    pub user_id: DbId,
    pub amount_cents: i32,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for recording a new charge.
#[derive(Debug)]
pub struct CreateCharge {
    pub user_id: DbId,
    pub amount_cents: i32,
    pub description: String,
}
