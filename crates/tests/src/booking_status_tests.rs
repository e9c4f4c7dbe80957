use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

async fn seed_booking(
    app: &axum::Router,
    pool: &sqlx::Pool<sqlx::Postgres>,
) -> (String, String, String) {
    let admin = common::seed_user(pool, "admin@test.com", "admin").await;
    let user = common::seed_user(pool, "student@test.com", "user").await;
    let admin_token = common::token_for(admin, "admin@test.com", "admin");
    let user_token = common::token_for(user, "student@test.com", "user");
    let room_id = common::seed_room(pool, "Sunny single", 12000, true, 4.5).await;

    let body = serde_json::json!({ "room_id": room_id }).to_string();
    let (status, booking) = common::post_json_authed(app, "/api/bookings", &body, &user_token).await;
    assert_eq!(status, StatusCode::CREATED);

    (
        booking["id"].as_str().unwrap().to_string(),
        admin_token,
        user_token,
    )
}

#[tokio::test]
async fn admin_confirms_a_booking() {
    let (app, pool, _guard) = common::test_app().await;
    let (booking_id, admin_token, user_token) = seed_booking(&app, &pool).await;

    let (status, updated) = common::patch_json_authed(
        &app,
        &format!("/api/bookings/{booking_id}/status"),
        r#"{"status":"confirmed"}"#,
        &admin_token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "confirmed");

    // Visible to the booker too
    let (_, list) = common::get_authed(&app, "/api/my/bookings", &user_token).await;
    assert_eq!(list[0]["status"], "confirmed");
}

#[tokio::test]
async fn admin_cancels_a_booking() {
    let (app, pool, _guard) = common::test_app().await;
    let (booking_id, admin_token, _) = seed_booking(&app, &pool).await;

    let (status, updated) = common::patch_json_authed(
        &app,
        &format!("/api/bookings/{booking_id}/status"),
        r#"{"status":"cancelled"}"#,
        &admin_token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "cancelled");
}

#[tokio::test]
async fn unknown_status_is_rejected() {
    let (app, pool, _guard) = common::test_app().await;
    let (booking_id, admin_token, _) = seed_booking(&app, &pool).await;

    let (status, body) = common::patch_json_authed(
        &app,
        &format!("/api/bookings/{booking_id}/status"),
        r#"{"status":"approved"}"#,
        &admin_token,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "BadRequest");
}

#[tokio::test]
async fn regular_user_cannot_change_status() {
    let (app, pool, _guard) = common::test_app().await;
    let (booking_id, _, user_token) = seed_booking(&app, &pool).await;

    let (status, body) = common::patch_json_authed(
        &app,
        &format!("/api/bookings/{booking_id}/status"),
        r#"{"status":"confirmed"}"#,
        &user_token,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "Forbidden");

    // Status unchanged
    let (_, list) = common::get_authed(&app, "/api/my/bookings", &user_token).await;
    assert_eq!(list[0]["status"], "pending");
}

#[tokio::test]
async fn unknown_booking_is_404() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");

    let (status, _) = common::patch_json_authed(
        &app,
        "/api/bookings/00000000-0000-0000-0000-00000000dead/status",
        r#"{"status":"confirmed"}"#,
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
