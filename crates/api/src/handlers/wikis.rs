//! Handlers for the wikis resource.
//!
//! Every action requires a signed-in user. Reads return the wiki wrapped in
//! the standard data envelope; create/update/destroy respond with a redirect
//! to the resulting page, mirroring a form-driven client flow.

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;

use wikiforge_core::error::CoreError;
use wikiforge_core::pagination::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use wikiforge_core::types::DbId;
use wikiforge_core::wiki::{validate_body, validate_title};
use wikiforge_db::models::wiki::{CreateWiki, UpdateWiki, Wiki, WikiDraft};
use wikiforge_db::repositories::WikiRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Query param types
-------------------------------------------------------------------------- */

#[derive(Debug, serde::Deserialize)]
pub struct ListWikisParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch a wiki by id or return 404.
async fn ensure_wiki(pool: &sqlx::PgPool, id: DbId) -> AppResult<Wiki> {
    WikiRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Wiki", id }))
}

/// The show path of a wiki, used as redirect target after writes.
fn wiki_path(id: DbId) -> String {
    format!("/wikis/{id}")
}

/* --------------------------------------------------------------------------
Handlers
-------------------------------------------------------------------------- */

/// GET /wikis (also mounted at GET /)
///
/// List wikis, newest first.
pub async fn list_wikis(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListWikisParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
    let offset = clamp_offset(params.offset);

    let wikis = WikiRepo::list(&state.pool, limit, offset).await?;
    Ok(Json(DataResponse { data: wikis }))
}

/// GET /wikis/new
///
/// Expose a fresh unsaved wiki bound to the current user for form pre-filling.
pub async fn new_wiki(auth: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: WikiDraft::for_user(auth.user_id),
    }))
}

/// GET /wikis/{id}
///
/// Fetch a single wiki by id.
pub async fn get_wiki(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let wiki = ensure_wiki(&state.pool, id).await?;
    Ok(Json(DataResponse { data: wiki }))
}

/// GET /wikis/{id}/edit
///
/// Expose the wiki's current title and body for pre-filling an edit form.
pub async fn edit_wiki(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let wiki = ensure_wiki(&state.pool, id).await?;
    Ok(Json(DataResponse { data: wiki }))
}

/// POST /wikis
///
/// Create a wiki owned by the current user and redirect to its show page.
pub async fn create_wiki(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateWiki>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_body(&input.body).map_err(AppError::Core)?;

    let wiki = WikiRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, wiki_id = wiki.id, "Wiki created");

    Ok(Redirect::to(&wiki_path(wiki.id)))
}

/// PUT /wikis/{id} (PATCH accepted on the same route)
///
/// Replace the wiki's title and body wholesale, then redirect to its show page.
pub async fn update_wiki(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateWiki>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_body(&input.body).map_err(AppError::Core)?;

    let wiki = WikiRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Wiki", id }))?;

    tracing::info!(user_id = auth.user_id, wiki_id = wiki.id, "Wiki updated");

    Ok(Redirect::to(&wiki_path(wiki.id)))
}

/// DELETE /wikis/{id}
///
/// Remove the wiki entirely and redirect to the index.
pub async fn delete_wiki(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let wiki = ensure_wiki(&state.pool, id).await?;

    WikiRepo::delete(&state.pool, wiki.id).await?;

    tracing::info!(user_id = auth.user_id, wiki_id = wiki.id, "Wiki deleted");

    Ok(Redirect::to("/wikis"))
}
