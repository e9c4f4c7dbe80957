use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware, Router,
};
use serde_json::Value;
use sqlx::{Pool, Postgres};
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

/// Global mutex ensuring tests run sequentially against the shared database.
/// Each test acquires this lock before truncating and seeding, preventing
/// concurrent tests from interfering with each other's data.
static TEST_MUTEX: std::sync::LazyLock<Mutex<()>> = std::sync::LazyLock::new(|| Mutex::new(()));

/// Build a test router backed by a real Postgres pool.
/// Acquires a global lock and truncates all tables. The returned `MutexGuard`
/// must be held for the duration of the test.
pub async fn test_app() -> (Router, Pool<Postgres>, tokio::sync::MutexGuard<'static, ()>) {
    let guard = TEST_MUTEX.lock().await;

    let _ = dotenvy::dotenv();
    if std::env::var("JWT_SECRET").is_err() {
        std::env::set_var("JWT_SECRET", "integration-test-secret");
    }

    let database_url = std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .expect("TEST_DATABASE_URL or DATABASE_URL must be set for tests");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    sqlx::query("TRUNCATE bookings, refresh_tokens, rooms, profiles CASCADE")
        .execute(&pool)
        .await
        .expect("Failed to truncate");

    let state = server::db::AppState { pool: pool.clone() };
    // Include the permissive auth middleware so the claims extractors work
    // when a Bearer token is present; unauthenticated requests pass through.
    let router = server::rest::api_router()
        .layer(middleware::from_fn_with_state(
            state.clone(),
            server::auth::middleware::auth_middleware,
        ))
        .with_state(state);

    (router, pool, guard)
}

/// Insert a profile directly and return its id.
pub async fn seed_user(pool: &Pool<Postgres>, email: &str, role: &str) -> Uuid {
    let hash = server::auth::password::hash_password("sup3r-secret").expect("hash password");
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO profiles (email, password_hash, full_name, role)
         VALUES ($1, $2, 'Test Person', $3) RETURNING id",
    )
    .bind(email)
    .bind(&hash)
    .bind(role)
    .fetch_one(pool)
    .await
    .expect("Failed to seed user")
}

/// Mint an access token for a seeded user.
pub fn token_for(user_id: Uuid, email: &str, role: &str) -> String {
    server::auth::jwt::create_access_token(user_id, email, role).expect("Failed to create test JWT")
}

/// Insert a room directly and return its id.
pub async fn seed_room(
    pool: &Pool<Postgres>,
    title: &str,
    price: i64,
    available: bool,
    rating: f64,
) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO rooms
            (title, price, original_price, location, room_type, gender_preference,
             capacity, available, rating, total_reviews, facilities, images,
             contact_person, contact_phone)
         VALUES ($1, $2, $3, 'Koramangala', 'single', 'mixed',
                 1, $4, $5, 3, ARRAY['WiFi','Parking'], ARRAY[]::TEXT[],
                 'Owner Person', '555-0100')
         RETURNING id",
    )
    .bind(title)
    .bind(price)
    .bind(price + 3000)
    .bind(available)
    .bind(rating)
    .fetch_one(pool)
    .await
    .expect("Failed to seed room")
}

/// GET a route without credentials.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// GET a route with a JWT Bearer token.
pub async fn get_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// POST JSON without credentials.
pub async fn post_json(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// POST JSON with a JWT Bearer token.
pub async fn post_json_authed(
    app: &Router,
    uri: &str,
    body: &str,
    token: &str,
) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// PUT JSON with a JWT Bearer token.
pub async fn put_json_authed(
    app: &Router,
    uri: &str,
    body: &str,
    token: &str,
) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// PATCH JSON with a JWT Bearer token.
pub async fn patch_json_authed(
    app: &Router,
    uri: &str,
    body: &str,
    token: &str,
) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// DELETE with a JWT Bearer token.
pub async fn delete_authed(app: &Router, uri: &str, token: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

/// Send a request through the router and parse the response.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");

    let body: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&body_bytes).to_string(),
        ))
    };

    (status, body)
}
