//! Wiki document model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wikiforge_core::types::{DbId, Timestamp};

/// A row from the `wikis` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Wiki {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub body: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new wiki.
#[derive(Debug, Deserialize)]
pub struct CreateWiki {
    pub title: String,
    pub body: String,
}

/// DTO for replacing a wiki's content. Title and body are overwritten
/// wholesale; there is no partial patch.
#[derive(Debug, Deserialize)]
pub struct UpdateWiki {
    pub title: String,
    pub body: String,
}

/// An unsaved wiki draft bound to its future owner, exposed by the `new`
/// action for form pre-filling.
#[derive(Debug, Serialize)]
pub struct WikiDraft {
    pub user_id: DbId,
    pub title: String,
    pub body: String,
}

impl WikiDraft {
    /// Blank draft owned by the given user.
    pub fn for_user(user_id: DbId) -> Self {
        Self {
            user_id,
            title: String::new(),
            body: String::new(),
        }
    }
}
