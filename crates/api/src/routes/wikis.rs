//! Route definitions for the wikis resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::wikis;
use crate::state::AppState;

/// Wiki routes, registered as `/wikis`.
///
/// ```text
/// GET    /            list_wikis
/// POST   /            create_wiki
/// GET    /new         new_wiki
/// GET    /{id}        get_wiki
/// PUT    /{id}        update_wiki
/// PATCH  /{id}        update_wiki
/// DELETE /{id}        delete_wiki
/// GET    /{id}/edit   edit_wiki
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wikis::list_wikis).post(wikis::create_wiki))
        .route("/new", get(wikis::new_wiki))
        .route(
            "/{id}",
            get(wikis::get_wiki)
                .put(wikis::update_wiki)
                .patch(wikis::update_wiki)
                .delete(wikis::delete_wiki),
        )
        .route("/{id}/edit", get(wikis::edit_wiki))
}
