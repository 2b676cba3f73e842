pub mod charges;
pub mod health;
pub mod users;
pub mod wikis;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                          wiki index alias (GET)
///
/// /wikis                     index, create (GET, POST)
/// /wikis/new                 new (GET)
/// /wikis/{id}                show, update, destroy (GET, PUT/PATCH, DELETE)
/// /wikis/{id}/edit           edit (GET)
///
/// /charges/new               new (GET)
/// /charges                   create (POST)
///
/// /users/sign_up             register (POST)
/// /users/sign_in             login (POST)
/// /users/refresh             token refresh (POST)
/// /users/sign_out            logout (DELETE, requires auth)
/// /users/{id}/downgrade      downgrade to standard plan (DELETE)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        // Root is aliased to the wiki index.
        .route("/", get(handlers::wikis::list_wikis))
        .nest("/wikis", wikis::router())
        .nest("/charges", charges::router())
        .nest("/users", users::router())
}
