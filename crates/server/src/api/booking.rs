use dioxus::prelude::*;
use shared_types::{AdminBookingResponse, AdminStats, Booking, BookingResponse};
use uuid::Uuid;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::AppErrorExt;

#[cfg(feature = "server")]
use super::auth::*;

/// Book a room for the signed-in user. Always starts as a pending booking
/// with check-in stamped today and the room's current price as the amount.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_booking(
    room_id: Uuid,
    special_requests: Option<String>,
) -> Result<Booking, ServerFnError> {
    use shared_types::CreateBookingRequest;

    let claims = require_auth()?;
    let db = get_db().await;
    crate::repo::booking::create(
        db,
        claims.sub,
        CreateBookingRequest {
            room_id,
            special_requests,
        },
    )
    .await
    .map_err(|e| e.into_server_fn_error())
}

/// The caller's bookings, newest first. Orphaned bookings (room deleted)
/// come back with the room fields unset.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn my_bookings() -> Result<Vec<BookingResponse>, ServerFnError> {
    let claims = require_auth()?;
    let db = get_db().await;
    crate::repo::booking::list_for_user(db, claims.sub)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// All bookings with booker identity, for the admin table.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_bookings_admin() -> Result<Vec<AdminBookingResponse>, ServerFnError> {
    require_admin()?;
    let db = get_db().await;
    crate::repo::booking::list_all(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Admin action: confirm or cancel (or reopen) a booking.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn set_booking_status(id: Uuid, status: String) -> Result<Booking, ServerFnError> {
    require_admin()?;
    let db = get_db().await;
    crate::repo::booking::update_status(db, id, &status)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Counts for the admin overview cards.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn admin_stats() -> Result<AdminStats, ServerFnError> {
    require_admin()?;
    let db = get_db().await;
    crate::repo::room::stats(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}
