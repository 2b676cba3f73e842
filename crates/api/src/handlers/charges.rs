//! Handlers for the charges resource (new, create).
//!
//! There is a single purchasable item: the premium membership upgrade. The
//! `new` action exposes the checkout details; `create` records the charge,
//! upgrades the paying user's plan, and redirects to the root page.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use serde::Serialize;

use wikiforge_core::account::PLAN_PREMIUM;
use wikiforge_core::billing::{PREMIUM_UPGRADE_AMOUNT_CENTS, PREMIUM_UPGRADE_DESCRIPTION};
use wikiforge_core::error::CoreError;
use wikiforge_db::models::charge::CreateCharge;
use wikiforge_db::repositories::{ChargeRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Checkout details exposed by the `new` action.
#[derive(Debug, Serialize)]
pub struct ChargeCheckout {
    pub amount_cents: i32,
    pub description: String,
}

/// GET /charges/new
///
/// Expose the premium upgrade checkout details for the current user.
pub async fn new_charge(_auth: AuthUser) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: ChargeCheckout {
            amount_cents: PREMIUM_UPGRADE_AMOUNT_CENTS,
            description: PREMIUM_UPGRADE_DESCRIPTION.to_string(),
        },
    }))
}

/// POST /charges
///
/// Record a premium upgrade charge for the current user, flip their plan to
/// `premium`, and redirect to the root page.
pub async fn create_charge(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let charge = ChargeRepo::create(
        &state.pool,
        &CreateCharge {
            user_id: auth.user_id,
            amount_cents: PREMIUM_UPGRADE_AMOUNT_CENTS,
            description: PREMIUM_UPGRADE_DESCRIPTION.to_string(),
        },
    )
    .await?;

    UserRepo::update_plan(&state.pool, auth.user_id, PLAN_PREMIUM)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    tracing::info!(
        user_id = auth.user_id,
        charge_id = charge.id,
        amount_cents = charge.amount_cents,
        "Premium upgrade charged"
    );

    Ok(Redirect::to("/"))
}
