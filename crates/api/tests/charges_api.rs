//! HTTP-level integration tests for the charges resource.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_user, get_auth, location, post_auth, post_empty, token_for};
use sqlx::PgPool;
use wikiforge_core::billing::PREMIUM_UPGRADE_AMOUNT_CENTS;
use wikiforge_db::repositories::{ChargeRepo, UserRepo};

/// The new action exposes the premium upgrade checkout details.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_charge_exposes_checkout_details(pool: PgPool) {
    let user = create_user(&pool).await;
    let token = token_for(&user);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/charges/new", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["amount_cents"], PREMIUM_UPGRADE_AMOUNT_CENTS);
    assert!(json["data"]["description"].is_string());
}

/// Creating a charge records exactly one row, upgrades the user's plan to
/// premium, and redirects to the root page.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_charge_upgrades_plan(pool: PgPool) {
    let user = create_user(&pool).await;
    assert_eq!(user.plan, "standard");
    let token = token_for(&user);

    let app = common::build_test_app(pool.clone());
    let response = post_auth(app, "/charges", &token).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    assert_eq!(ChargeRepo::count_for_user(&pool, user.id).await.unwrap(), 1);

    let stored = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(stored.plan, "premium");
}

/// Charging twice records two rows; the plan simply stays premium.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeat_charge_is_recorded(pool: PgPool) {
    let user = create_user(&pool).await;
    let token = token_for(&user);

    let app = common::build_test_app(pool.clone());
    post_auth(app, "/charges", &token).await;
    let app = common::build_test_app(pool.clone());
    post_auth(app, "/charges", &token).await;

    assert_eq!(ChargeRepo::count_for_user(&pool, user.id).await.unwrap(), 2);
    let stored = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(stored.plan, "premium");
}

/// Both charge actions require a signed-in user.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_charges_require_sign_in(pool: PgPool) {
    let response = common::get(common::build_test_app(pool.clone()), "/charges/new").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = post_empty(common::build_test_app(pool), "/charges").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
