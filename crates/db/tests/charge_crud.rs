//! Repository-level tests for `ChargeRepo`.

use sqlx::PgPool;
use wikiforge_core::types::DbId;
use wikiforge_db::models::charge::CreateCharge;
use wikiforge_db::models::user::CreateUser;
use wikiforge_db::repositories::{ChargeRepo, UserRepo};

async fn owner(pool: &PgPool) -> DbId {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: "payer@example.com".to_string(),
            password_hash: "hashed-password".to_string(),
        },
    )
    .await
    .unwrap();
    user.id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_count_charges(pool: PgPool) {
    let user_id = owner(&pool).await;
    assert_eq!(ChargeRepo::count_for_user(&pool, user_id).await.unwrap(), 0);

    let charge = ChargeRepo::create(
        &pool,
        &CreateCharge {
            user_id,
            amount_cents: 1500,
            description: "Premium membership upgrade".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(charge.user_id, user_id);
    assert_eq!(charge.amount_cents, 1500);

    assert_eq!(ChargeRepo::count_for_user(&pool, user_id).await.unwrap(), 1);

    // Counting is scoped per user.
    assert_eq!(ChargeRepo::count_for_user(&pool, user_id + 1).await.unwrap(), 0);
}
