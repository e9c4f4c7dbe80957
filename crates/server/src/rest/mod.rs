pub mod booking;
pub mod room;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::routing::{get, patch, post, put};
use axum::Router;

use crate::auth::jwt::Claims;
use crate::db::AppState;
use shared_types::AppError;

/// Extractor for an authenticated caller. The auth middleware validates the
/// token and stashes `Claims` in request extensions; absence means the
/// request carried no usable credentials.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub Claims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthClaims)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}

/// Extractor for an authenticated admin. Rejects before the handler body
/// runs, so denied requests never touch the database.
#[derive(Debug, Clone)]
pub struct AdminClaims(pub Claims);

impl<S> FromRequestParts<S> for AdminClaims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthClaims(claims) = AuthClaims::from_request_parts(parts, state).await?;
        if claims.role != "admin" {
            return Err(AppError::forbidden("Admin role required"));
        }
        Ok(AdminClaims(claims))
    }
}

/// Build the REST API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/api/rooms", get(room::list_rooms))
        .route("/api/rooms/featured", get(room::featured_rooms))
        .route("/api/rooms/{id}", get(room::get_room))
        // Room administration
        .route("/api/rooms", post(room::create_room))
        .route("/api/rooms/{id}", put(room::update_room))
        .route("/api/rooms/{id}", axum::routing::delete(room::delete_room))
        .route("/api/admin/rooms", get(room::list_rooms_admin))
        .route("/api/admin/stats", get(room::admin_stats))
        // Bookings
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/my/bookings", get(booking::my_bookings))
        .route("/api/admin/bookings", get(booking::list_bookings_admin))
        .route(
            "/api/bookings/{id}/status",
            patch(booking::update_booking_status),
        )
}
