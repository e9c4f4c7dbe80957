use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Allowed values for `bookings.status`.
pub const BOOKING_STATUSES: &[&str] = &["pending", "confirmed", "cancelled"];

/// Allowed values for `bookings.payment_status`.
pub const PAYMENT_STATUSES: &[&str] = &["unpaid", "paid", "refunded"];

pub fn is_valid_booking_status(value: &str) -> bool {
    BOOKING_STATUSES.contains(&value)
}

/// Booking row as stored. `room_id` is nullable: deleting a room keeps its
/// bookings around with the reference cleared.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Option<Uuid>,
    pub check_in: NaiveDate,
    pub check_out: Option<NaiveDate>,
    pub total_amount: i64,
    pub status: String,
    pub payment_status: String,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Booking joined with its room (LEFT JOIN) for dashboard and admin lists.
/// Room fields are `None` when the room has since been deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Option<Uuid>,
    pub check_in: NaiveDate,
    pub check_out: Option<NaiveDate>,
    pub total_amount: i64,
    pub status: String,
    pub payment_status: String,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub room_title: Option<String>,
    pub room_location: Option<String>,
}

/// Admin booking listing, additionally carrying the booker's identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminBookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub room_id: Option<Uuid>,
    pub check_in: NaiveDate,
    pub total_amount: i64,
    pub status: String,
    pub payment_status: String,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub room_title: Option<String>,
    pub booker_name: String,
    pub booker_email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateBookingRequest {
    pub room_id: Uuid,
    #[serde(default)]
    pub special_requests: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

/// Counts shown on the admin overview cards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AdminStats {
    pub total_rooms: i64,
    pub available_rooms: i64,
    pub total_bookings: i64,
    pub pending_bookings: i64,
}
