use chrono::Utc;
use shared_types::{AdminBookingResponse, AppError, Booking, BookingResponse, CreateBookingRequest};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Create a pending booking for the given user.
///
/// Check-in is stamped with today's date and the amount snapshots the room's
/// current price. No stay dates are collected and no occupancy check runs;
/// availability is a listing flag, not a calendar.
pub async fn create(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    req: CreateBookingRequest,
) -> Result<Booking, AppError> {
    let room: Option<(i64, bool)> =
        sqlx::query_as("SELECT price, available FROM rooms WHERE id = $1")
            .bind(req.room_id)
            .fetch_optional(pool)
            .await
            .map_err(SqlxErrorExt::into_app_error)?;

    let (price, available) = room.ok_or_else(|| AppError::not_found("Room not found"))?;
    if !available {
        return Err(AppError::conflict("This room is no longer available"));
    }

    let check_in = Utc::now().date_naive();

    let booking = sqlx::query_as::<_, Booking>(
        r#"INSERT INTO bookings (user_id, room_id, check_in, total_amount, special_requests)
           VALUES ($1, $2, $3, $4, $5)
           RETURNING *"#,
    )
    .bind(user_id)
    .bind(req.room_id)
    .bind(check_in)
    .bind(price)
    .bind(&req.special_requests)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    tracing::info!(booking_id = %booking.id, user_id = %user_id, room_id = %req.room_id, "Booking created");
    Ok(booking)
}

/// A user's bookings, newest first. LEFT JOIN keeps bookings whose room has
/// been deleted; their room fields come back NULL.
pub async fn list_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<BookingResponse>, AppError> {
    sqlx::query_as::<_, BookingResponse>(
        r#"SELECT b.id, b.user_id, b.room_id, b.check_in, b.check_out,
                  b.total_amount, b.status, b.payment_status,
                  b.special_requests, b.created_at,
                  r.title AS room_title, r.location AS room_location
           FROM bookings b
           LEFT JOIN rooms r ON r.id = b.room_id
           WHERE b.user_id = $1
           ORDER BY b.created_at DESC"#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Every booking with the booker's identity, for the admin table.
pub async fn list_all(pool: &Pool<Postgres>) -> Result<Vec<AdminBookingResponse>, AppError> {
    sqlx::query_as::<_, AdminBookingResponse>(
        r#"SELECT b.id, b.user_id, b.room_id, b.check_in, b.total_amount,
                  b.status, b.payment_status, b.special_requests, b.created_at,
                  r.title AS room_title,
                  p.full_name AS booker_name, p.email AS booker_email
           FROM bookings b
           LEFT JOIN rooms r ON r.id = b.room_id
           JOIN profiles p ON p.id = b.user_id
           ORDER BY b.created_at DESC"#,
    )
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Set a booking's status. No transition graph — admins may move a booking
/// between pending, confirmed and cancelled freely.
pub async fn update_status(
    pool: &Pool<Postgres>,
    id: Uuid,
    status: &str,
) -> Result<Booking, AppError> {
    if !shared_types::is_valid_booking_status(status) {
        return Err(AppError::bad_request(format!(
            "Invalid booking status '{status}'"
        )));
    }

    sqlx::query_as::<_, Booking>(
        "UPDATE bookings SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(status)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .ok_or_else(|| AppError::not_found("Booking not found"))
}
