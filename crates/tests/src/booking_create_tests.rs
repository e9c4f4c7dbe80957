use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn booking_starts_pending_with_price_snapshot() {
    let (app, pool, _guard) = common::test_app().await;

    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let token = common::token_for(user, "student@test.com", "user");
    let room_id = common::seed_room(&pool, "Sunny single", 12000, true, 4.5).await;

    let body = serde_json::json!({
        "room_id": room_id,
        "special_requests": "Ground floor please"
    })
    .to_string();

    let (status, booking) = common::post_json_authed(&app, "/api/bookings", &body, &token).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(booking["status"], "pending");
    assert_eq!(booking["payment_status"], "unpaid");
    assert_eq!(booking["total_amount"], 12000);
    assert_eq!(booking["special_requests"], "Ground floor please");
    assert_eq!(booking["user_id"], user.to_string());

    let today = chrono::Utc::now().date_naive().to_string();
    assert_eq!(booking["check_in"], today);
}

#[tokio::test]
async fn amount_stays_snapshotted_after_price_change() {
    let (app, pool, _guard) = common::test_app().await;

    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let token = common::token_for(user, "student@test.com", "user");
    let room_id = common::seed_room(&pool, "Sunny single", 12000, true, 4.5).await;

    let body = serde_json::json!({ "room_id": room_id }).to_string();
    let (status, booking) = common::post_json_authed(&app, "/api/bookings", &body, &token).await;
    assert_eq!(status, StatusCode::CREATED);

    sqlx::query("UPDATE rooms SET price = 15000 WHERE id = $1")
        .bind(room_id)
        .execute(&pool)
        .await
        .unwrap();

    let (status, list) = common::get_authed(&app, "/api/my/bookings", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0]["id"], booking["id"]);
    assert_eq!(list[0]["total_amount"], 12000);
}

#[tokio::test]
async fn unavailable_room_is_conflict() {
    let (app, pool, _guard) = common::test_app().await;

    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let token = common::token_for(user, "student@test.com", "user");
    let room_id = common::seed_room(&pool, "Full room", 12000, false, 4.5).await;

    let body = serde_json::json!({ "room_id": room_id }).to_string();
    let (status, response) = common::post_json_authed(&app, "/api/bookings", &body, &token).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["kind"], "Conflict");

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM bookings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn missing_room_is_404() {
    let (app, pool, _guard) = common::test_app().await;

    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let token = common::token_for(user, "student@test.com", "user");

    let body = r#"{"room_id":"00000000-0000-0000-0000-00000000dead"}"#;
    let (status, response) = common::post_json_authed(&app, "/api/bookings", body, &token).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["kind"], "NotFound");
}

#[tokio::test]
async fn unauthenticated_booking_is_401_and_inserts_nothing() {
    let (app, pool, _guard) = common::test_app().await;

    let room_id = common::seed_room(&pool, "Sunny single", 12000, true, 4.5).await;

    let body = serde_json::json!({ "room_id": room_id }).to_string();
    let (status, response) = common::post_json(&app, "/api/bookings", &body).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["kind"], "Unauthorized");

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM bookings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
