use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn list_returns_seeded_rooms() {
    let (app, pool, _guard) = common::test_app().await;

    common::seed_room(&pool, "Sunny single", 12000, true, 4.5).await;
    common::seed_room(&pool, "Cozy double", 9000, true, 4.0).await;

    let (status, body) = common::get(&app, "/api/rooms").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn list_never_exposes_contact_details() {
    let (app, pool, _guard) = common::test_app().await;

    common::seed_room(&pool, "Sunny single", 12000, true, 4.5).await;

    let (status, body) = common::get(&app, "/api/rooms").await;
    assert_eq!(status, StatusCode::OK);

    let raw = body.to_string();
    assert!(!raw.contains("contact_person"));
    assert!(!raw.contains("contact_phone"));
    assert!(!raw.contains("Owner Person"));
    assert!(!raw.contains("555-0100"));
}

#[tokio::test]
async fn search_matches_title_and_location() {
    let (app, pool, _guard) = common::test_app().await;

    common::seed_room(&pool, "Sunny single near gate", 12000, true, 4.5).await;
    common::seed_room(&pool, "Quiet double", 9000, true, 4.0).await;

    let (status, body) = common::get(&app, "/api/rooms?search=sunny").await;
    assert_eq!(status, StatusCode::OK);
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["title"], "Sunny single near gate");

    // Both rooms share the seeded location
    let (status, body) = common::get(&app, "/api/rooms?search=koramangala").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn max_price_filter_excludes_expensive_rooms() {
    let (app, pool, _guard) = common::test_app().await;

    common::seed_room(&pool, "Budget room", 6000, true, 3.5).await;
    common::seed_room(&pool, "Premium room", 20000, true, 4.9).await;

    let (status, body) = common::get(&app, "/api/rooms?max_price=10000").await;
    assert_eq!(status, StatusCode::OK);
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["title"], "Budget room");
}

#[tokio::test]
async fn available_only_hides_booked_out_rooms() {
    let (app, pool, _guard) = common::test_app().await;

    common::seed_room(&pool, "Open room", 8000, true, 4.0).await;
    common::seed_room(&pool, "Full room", 8000, false, 4.8).await;

    let (status, body) = common::get(&app, "/api/rooms?available_only=true").await;
    assert_eq!(status, StatusCode::OK);
    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["title"], "Open room");

    // Without the flag both show up
    let (_, body) = common::get(&app, "/api/rooms").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn get_room_returns_detail_without_contact() {
    let (app, pool, _guard) = common::test_app().await;

    let id = common::seed_room(&pool, "Sunny single", 12000, true, 4.5).await;

    let (status, body) = common::get(&app, &format!("/api/rooms/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Sunny single");
    assert_eq!(body["price"], 12000);
    // Occupancy is public; the detail page shows current/capacity
    assert_eq!(body["capacity"], 1);
    assert_eq!(body["current_occupancy"], 0);
    assert!(body.get("contact_person").is_none());
    assert!(body.get("contact_phone").is_none());
}

#[tokio::test]
async fn get_unknown_room_is_404() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::get(
        &app,
        "/api/rooms/00000000-0000-0000-0000-00000000dead",
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["kind"], "NotFound");
}
