//! Route definitions for the charges resource.
//!
//! Only `new` and `create` are routed; charges are never listed, shown,
//! or deleted through the API.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::charges;
use crate::state::AppState;

/// Charge routes, registered as `/charges`.
///
/// ```text
/// GET  /new   new_charge
/// POST /      create_charge
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new", get(charges::new_charge))
        .route("/", post(charges::create_charge))
}
