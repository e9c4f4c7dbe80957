use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn my_bookings_only_shows_the_callers() {
    let (app, pool, _guard) = common::test_app().await;

    let alice = common::seed_user(&pool, "alice@test.com", "user").await;
    let bob = common::seed_user(&pool, "bob@test.com", "user").await;
    let alice_token = common::token_for(alice, "alice@test.com", "user");
    let bob_token = common::token_for(bob, "bob@test.com", "user");
    let room_id = common::seed_room(&pool, "Shared flat", 9000, true, 4.0).await;

    let body = serde_json::json!({ "room_id": room_id }).to_string();
    let (status, _) = common::post_json_authed(&app, "/api/bookings", &body, &alice_token).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = common::get_authed(&app, "/api/my/bookings", &alice_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["room_title"], "Shared flat");
    assert_eq!(list[0]["room_location"], "Koramangala");
    assert_eq!(list[0]["payment_status"], "unpaid");

    let (status, list) = common::get_authed(&app, "/api/my/bookings", &bob_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn my_bookings_requires_authentication() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::get(&app, "/api/my/bookings").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "Unauthorized");
}

#[tokio::test]
async fn admin_listing_includes_booker_identity() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let admin_token = common::token_for(admin, "admin@test.com", "admin");
    let user_token = common::token_for(user, "student@test.com", "user");
    let room_id = common::seed_room(&pool, "Sunny single", 12000, true, 4.5).await;

    let body = serde_json::json!({ "room_id": room_id }).to_string();
    let (status, _) = common::post_json_authed(&app, "/api/bookings", &body, &user_token).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = common::get_authed(&app, "/api/admin/bookings", &admin_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["booker_name"], "Test Person");
    assert_eq!(list[0]["booker_email"], "student@test.com");
    assert_eq!(list[0]["room_title"], "Sunny single");
    assert_eq!(list[0]["payment_status"], "unpaid");
}

#[tokio::test]
async fn admin_listing_rejects_regular_users() {
    let (app, pool, _guard) = common::test_app().await;

    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let token = common::token_for(user, "student@test.com", "user");

    let (status, body) = common::get_authed(&app, "/api/admin/bookings", &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "Forbidden");
}

#[tokio::test]
async fn orphaned_booking_keeps_showing_for_admin() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let admin_token = common::token_for(admin, "admin@test.com", "admin");
    let user_token = common::token_for(user, "student@test.com", "user");
    let room_id = common::seed_room(&pool, "Doomed room", 9000, true, 4.0).await;

    let body = serde_json::json!({ "room_id": room_id }).to_string();
    let (status, _) = common::post_json_authed(&app, "/api/bookings", &body, &user_token).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) =
        common::delete_authed(&app, &format!("/api/rooms/{room_id}"), &admin_token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, list) = common::get_authed(&app, "/api/admin/bookings", &admin_token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert!(list[0]["room_id"].is_null());
    assert!(list[0]["room_title"].is_null());
    assert_eq!(list[0]["booker_email"], "student@test.com");
}
