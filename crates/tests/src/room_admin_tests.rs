use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

fn create_body() -> String {
    serde_json::json!({
        "title": "New listing near campus",
        "price": 11000,
        "original_price": 14000,
        "location": "HSR Layout",
        "room_type": "double",
        "gender_preference": "female",
        "capacity": 2,
        "facilities": ["WiFi", "Meals"],
        "contact_person": "Owner",
        "contact_phone": "555-0199"
    })
    .to_string()
}

#[tokio::test]
async fn admin_can_create_room() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");

    let (status, body) = common::post_json_authed(&app, "/api/rooms", &create_body(), &token).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["title"], "New listing near campus");
    assert_eq!(body["available"], true);
    // Full row for admins, contact columns included
    assert_eq!(body["contact_person"], "Owner");
}

#[tokio::test]
async fn non_admin_cannot_create_room() {
    let (app, pool, _guard) = common::test_app().await;

    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let token = common::token_for(user, "student@test.com", "user");

    let (status, body) = common::post_json_authed(&app, "/api/rooms", &create_body(), &token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["kind"], "Forbidden");

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM rooms")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn unauthenticated_create_is_401() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::post_json(&app, "/api/rooms", &create_body()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["kind"], "Unauthorized");
}

#[tokio::test]
async fn create_rejects_bad_room_type() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");

    let body = serde_json::json!({
        "title": "Weird room",
        "price": 9000,
        "location": "HSR Layout",
        "room_type": "penthouse",
        "gender_preference": "mixed"
    })
    .to_string();

    let (status, _) = common::post_json_authed(&app, "/api/rooms", &body, &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_persists_occupancy() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");

    let body = serde_json::json!({
        "title": "Shared triple near campus",
        "price": 8000,
        "location": "HSR Layout",
        "room_type": "triple",
        "gender_preference": "mixed",
        "capacity": 3,
        "current_occupancy": 2
    })
    .to_string();

    let (status, room) = common::post_json_authed(&app, "/api/rooms", &body, &token).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(room["capacity"], 3);
    assert_eq!(room["current_occupancy"], 2);
}

#[tokio::test]
async fn create_rejects_occupancy_over_capacity() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");

    let body = serde_json::json!({
        "title": "Overfull room",
        "price": 8000,
        "location": "HSR Layout",
        "room_type": "double",
        "gender_preference": "mixed",
        "capacity": 2,
        "current_occupancy": 3
    })
    .to_string();

    let (status, response) = common::post_json_authed(&app, "/api/rooms", &body, &token).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["kind"], "BadRequest");

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM rooms")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn update_checks_occupancy_against_merged_capacity() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");
    let id = common::seed_room(&pool, "Single room", 12000, true, 4.0).await;

    // Seeded capacity is 1, so an occupancy of 2 must be rejected
    let (status, _) = common::put_json_authed(
        &app,
        &format!("/api/rooms/{id}"),
        r#"{"current_occupancy":2}"#,
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Raising capacity in the same request makes it valid
    let (status, response) = common::put_json_authed(
        &app,
        &format!("/api/rooms/{id}"),
        r#"{"capacity":2,"current_occupancy":2}"#,
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["capacity"], 2);
    assert_eq!(response["current_occupancy"], 2);
}

#[tokio::test]
async fn update_is_partial() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");
    let id = common::seed_room(&pool, "Old title", 12000, true, 4.0).await;

    let body = r#"{"title":"New title","available":false}"#;
    let (status, response) =
        common::put_json_authed(&app, &format!("/api/rooms/{id}"), body, &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["title"], "New title");
    assert_eq!(response["available"], false);
    // Untouched fields keep their values
    assert_eq!(response["price"], 12000);
    assert_eq!(response["location"], "Koramangala");
}

#[tokio::test]
async fn update_unknown_room_is_404() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");

    let (status, _) = common::put_json_authed(
        &app,
        "/api/rooms/00000000-0000-0000-0000-00000000dead",
        r#"{"title":"Whatever"}"#,
        &token,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_room_and_orphans_bookings() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");
    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let room_id = common::seed_room(&pool, "Doomed room", 9000, true, 4.0).await;

    // Book it first
    let user_token = common::token_for(user, "student@test.com", "user");
    let book_body = serde_json::json!({ "room_id": room_id }).to_string();
    let (status, booking) =
        common::post_json_authed(&app, "/api/bookings", &book_body, &user_token).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = common::delete_authed(&app, &format!("/api/rooms/{room_id}"), &token).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // The booking survives with its room reference cleared
    let (status, list) = common::get_authed(&app, "/api/my/bookings", &user_token).await;
    assert_eq!(status, StatusCode::OK);
    let bookings = list.as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["id"], booking["id"]);
    assert!(bookings[0]["room_id"].is_null());
    assert!(bookings[0]["room_title"].is_null());
}

#[tokio::test]
async fn admin_listing_includes_contact_columns() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");
    common::seed_room(&pool, "Sunny single", 12000, true, 4.5).await;

    let (status, body) = common::get_authed(&app, "/api/admin/rooms", &token).await;
    assert_eq!(status, StatusCode::OK);
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["contact_person"], "Owner Person");
    assert_eq!(rooms[0]["contact_phone"], "555-0100");
}

#[tokio::test]
async fn admin_stats_count_rooms_and_bookings() {
    let (app, pool, _guard) = common::test_app().await;

    let admin = common::seed_user(&pool, "admin@test.com", "admin").await;
    let token = common::token_for(admin, "admin@test.com", "admin");
    let user = common::seed_user(&pool, "student@test.com", "user").await;
    let user_token = common::token_for(user, "student@test.com", "user");

    let open = common::seed_room(&pool, "Open", 9000, true, 4.0).await;
    common::seed_room(&pool, "Full", 9000, false, 4.0).await;

    let body = serde_json::json!({ "room_id": open }).to_string();
    let (status, _) = common::post_json_authed(&app, "/api/bookings", &body, &user_token).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, stats) = common::get_authed(&app, "/api/admin/stats", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total_rooms"], 2);
    assert_eq!(stats["available_rooms"], 1);
    assert_eq!(stats["total_bookings"], 1);
    assert_eq!(stats["pending_bookings"], 1);
}
