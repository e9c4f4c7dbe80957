use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    AdminBookingResponse, AppError, Booking, BookingResponse, CreateBookingRequest,
    UpdateBookingStatusRequest,
};

use super::{AdminClaims, AuthClaims};
use crate::repo;

/// POST /api/bookings — book a room as the signed-in user.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created as pending", body = Booking),
        (status = 401, description = "Authentication required", body = AppError),
        (status = 404, description = "Room not found", body = AppError),
        (status = 409, description = "Room unavailable", body = AppError)
    ),
    tag = "bookings"
)]
pub async fn create_booking(
    AuthClaims(claims): AuthClaims,
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = repo::booking::create(&pool, claims.sub, body).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/my/bookings
#[utoipa::path(
    get,
    path = "/api/my/bookings",
    responses(
        (status = 200, description = "The caller's bookings", body = Vec<BookingResponse>),
        (status = 401, description = "Authentication required", body = AppError)
    ),
    tag = "bookings"
)]
pub async fn my_bookings(
    AuthClaims(claims): AuthClaims,
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = repo::booking::list_for_user(&pool, claims.sub).await?;
    Ok(Json(bookings))
}

/// GET /api/admin/bookings
#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    responses(
        (status = 200, description = "All bookings", body = Vec<AdminBookingResponse>),
        (status = 403, description = "Admin role required", body = AppError)
    ),
    tag = "admin"
)]
pub async fn list_bookings_admin(
    _admin: AdminClaims,
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<AdminBookingResponse>>, AppError> {
    let bookings = repo::booking::list_all(&pool).await?;
    Ok(Json(bookings))
}

/// PATCH /api/bookings/{id}/status
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    params(("id" = Uuid, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Booking),
        (status = 400, description = "Invalid status", body = AppError),
        (status = 404, description = "Booking not found", body = AppError)
    ),
    tag = "admin"
)]
pub async fn update_booking_status(
    _admin: AdminClaims,
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateBookingStatusRequest>,
) -> Result<Json<Booking>, AppError> {
    let booking = repo::booking::update_status(&pool, id, &body.status).await?;
    Ok(Json(booking))
}
