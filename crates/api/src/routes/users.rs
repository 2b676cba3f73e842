//! Route definitions for the `/users` resource: account registration,
//! session management, and the plan downgrade action.

use axum::routing::{delete, post};
use axum::Router;

use crate::handlers::{auth, users};
use crate::state::AppState;

/// User routes, registered as `/users`.
///
/// ```text
/// POST   /sign_up          sign_up
/// POST   /sign_in          sign_in
/// POST   /refresh          refresh
/// DELETE /sign_out         sign_out (requires auth)
/// DELETE /{id}/downgrade   downgrade (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sign_up", post(auth::sign_up))
        .route("/sign_in", post(auth::sign_in))
        .route("/refresh", post(auth::refresh))
        .route("/sign_out", delete(auth::sign_out))
        .route("/{id}/downgrade", delete(users::downgrade))
}
