//! Handlers for user account actions (downgrade).

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect};

use wikiforge_core::account::PLAN_STANDARD;
use wikiforge_core::error::CoreError;
use wikiforge_core::types::DbId;
use wikiforge_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// DELETE /users/{id}/downgrade
///
/// Drop the account back to the `standard` plan. Users may only downgrade
/// their own account.
pub async fn downgrade(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You may only downgrade your own account".into(),
        )));
    }

    UserRepo::update_plan(&state.pool, id, PLAN_STANDARD)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    tracing::info!(user_id = id, "Account downgraded to standard");

    Ok(Redirect::to("/"))
}
