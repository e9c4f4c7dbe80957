use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common;

#[tokio::test]
async fn featured_caps_at_six_rooms() {
    let (app, pool, _guard) = common::test_app().await;

    for i in 0..8 {
        common::seed_room(&pool, &format!("Room {i}"), 8000, true, i as f64 / 2.0).await;
    }

    let (status, body) = common::get(&app, "/api/rooms/featured").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn featured_orders_by_rating_descending() {
    let (app, pool, _guard) = common::test_app().await;

    common::seed_room(&pool, "Average", 8000, true, 3.2).await;
    common::seed_room(&pool, "Best", 8000, true, 4.9).await;
    common::seed_room(&pool, "Good", 8000, true, 4.1).await;

    let (status, body) = common::get(&app, "/api/rooms/featured").await;
    assert_eq!(status, StatusCode::OK);

    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Best", "Good", "Average"]);
}

#[tokio::test]
async fn featured_skips_unavailable_rooms() {
    let (app, pool, _guard) = common::test_app().await;

    common::seed_room(&pool, "Open", 8000, true, 3.0).await;
    // Higher rated but booked out — must not appear
    common::seed_room(&pool, "Full", 8000, false, 5.0).await;

    let (status, body) = common::get(&app, "/api/rooms/featured").await;
    assert_eq!(status, StatusCode::OK);

    let rooms = body.as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["title"], "Open");
}

#[tokio::test]
async fn featured_never_exposes_contact_details() {
    let (app, pool, _guard) = common::test_app().await;

    common::seed_room(&pool, "Open", 8000, true, 4.0).await;

    let (status, body) = common::get(&app, "/api/rooms/featured").await;
    assert_eq!(status, StatusCode::OK);

    let raw = body.to_string();
    assert!(!raw.contains("contact_person"));
    assert!(!raw.contains("555-0100"));
}

#[tokio::test]
async fn featured_is_empty_without_rooms() {
    let (app, _pool, _guard) = common::test_app().await;

    let (status, body) = common::get(&app, "/api/rooms/featured").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);
}
