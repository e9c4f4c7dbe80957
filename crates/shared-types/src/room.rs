use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Allowed values for `rooms.room_type`.
pub const ROOM_TYPES: &[&str] = &["single", "double", "triple", "shared"];

/// Allowed values for `rooms.gender_preference`.
pub const GENDER_PREFERENCES: &[&str] = &["male", "female", "mixed"];

pub fn is_valid_room_type(value: &str) -> bool {
    ROOM_TYPES.contains(&value)
}

pub fn is_valid_gender_preference(value: &str) -> bool {
    GENDER_PREFERENCES.contains(&value)
}

/// Discount percentage for a room, shown on cards and the detail page.
///
/// Defined only when an original price exists and is strictly greater than
/// the current price: `round((original - price) / original * 100)`.
pub fn discount_percent(price: i64, original_price: Option<i64>) -> Option<u32> {
    let original = original_price?;
    if original <= price || original <= 0 {
        return None;
    }
    let pct = (original - price) as f64 / original as f64 * 100.0;
    Some(pct.round() as u32)
}

/// Facilities with a dedicated icon; anything else renders a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facility {
    Wifi,
    Parking,
    Meals,
    Other,
}

impl Facility {
    /// Match a free-form facility label to a known variant.
    /// Matching is case-insensitive; unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "wifi" | "wi-fi" => Facility::Wifi,
            "parking" => Facility::Parking,
            "meals" => Facility::Meals,
            _ => Facility::Other,
        }
    }
}

/// Full room row, including owner contact columns.
/// Only admin flows may see this type; catalog reads use [`RoomResponse`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Room {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub original_price: Option<i64>,
    pub location: String,
    pub room_type: String,
    pub gender_preference: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub available: bool,
    pub rating: f64,
    pub total_reviews: i32,
    pub facilities: Vec<String>,
    pub images: Vec<String>,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a room, backed by the `rooms_public` view.
/// Never carries owner contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "server", derive(sqlx::FromRow))]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RoomResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: i64,
    pub original_price: Option<i64>,
    pub location: String,
    pub room_type: String,
    pub gender_preference: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub available: bool,
    pub rating: f64,
    pub total_reviews: i32,
    pub facilities: Vec<String>,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl RoomResponse {
    pub fn discount_percent(&self) -> Option<u32> {
        discount_percent(self.price, self.original_price)
    }

    /// Every place is taken. A cosmetic guard for the booking button; the
    /// server does not re-check occupancy on insert.
    pub fn is_full(&self) -> bool {
        self.current_occupancy >= self.capacity
    }
}

impl From<Room> for RoomResponse {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            title: room.title,
            description: room.description,
            price: room.price,
            original_price: room.original_price,
            location: room.location,
            room_type: room.room_type,
            gender_preference: room.gender_preference,
            capacity: room.capacity,
            current_occupancy: room.current_occupancy,
            available: room.available,
            rating: room.rating,
            total_reviews: room.total_reviews,
            facilities: room.facilities,
            images: room.images,
            created_at: room.created_at,
        }
    }
}

/// Catalog filters accepted by the room list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema, utoipa::IntoParams))]
pub struct RoomQuery {
    /// Substring match against title and location.
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub gender_preference: Option<String>,
    #[serde(default)]
    pub max_price: Option<i64>,
    /// When true, only rooms currently open for booking.
    #[serde(default)]
    pub available_only: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateRoomRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 200, message = "Title must be 3-200 characters"))
    )]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Price must be positive"))
    )]
    pub price: i64,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 2, message = "Location is required"))
    )]
    pub location: String,
    pub room_type: String,
    pub gender_preference: String,
    #[serde(default = "default_capacity")]
    pub capacity: i32,
    #[serde(default)]
    pub current_occupancy: i32,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

fn default_capacity() -> i32 {
    1
}

fn default_true() -> bool {
    true
}

/// Partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateRoomRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub original_price: Option<i64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub gender_preference: Option<String>,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub current_occupancy: Option<i32>,
    #[serde(default)]
    pub available: Option<bool>,
    #[serde(default)]
    pub facilities: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}
