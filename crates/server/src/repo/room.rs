use shared_types::{AdminStats, AppError, CreateRoomRequest, Room, RoomQuery, RoomResponse, UpdateRoomRequest};
use sqlx::{Pool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

const PUBLIC_COLUMNS: &str = "id, title, description, price, original_price, location, room_type, \
     gender_preference, capacity, current_occupancy, available, rating, total_reviews, facilities, \
     images, created_at";

/// Maximum rooms shown in the featured strip on the landing page.
const FEATURED_LIMIT: i64 = 6;

/// List rooms from the public view with optional catalog filters.
pub async fn list_public(
    pool: &Pool<Postgres>,
    query: &RoomQuery,
) -> Result<Vec<RoomResponse>, AppError> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {PUBLIC_COLUMNS} FROM rooms_public WHERE TRUE"
    ));

    if let Some(search) = query.search.as_deref().filter(|s| !s.trim().is_empty()) {
        let pattern = format!("%{}%", search.trim());
        builder.push(" AND (title ILIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR location ILIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }
    if let Some(room_type) = query.room_type.as_deref().filter(|s| !s.is_empty()) {
        builder.push(" AND room_type = ");
        builder.push_bind(room_type.to_string());
    }
    if let Some(pref) = query
        .gender_preference
        .as_deref()
        .filter(|s| !s.is_empty())
    {
        builder.push(" AND gender_preference = ");
        builder.push_bind(pref.to_string());
    }
    if let Some(max_price) = query.max_price {
        builder.push(" AND price <= ");
        builder.push_bind(max_price);
    }
    if query.available_only {
        builder.push(" AND available = TRUE");
    }

    builder.push(" ORDER BY rating DESC, created_at DESC");

    builder
        .build_query_as::<RoomResponse>()
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// The landing-page listing: at most six available rooms, best rated first.
pub async fn featured(pool: &Pool<Postgres>) -> Result<Vec<RoomResponse>, AppError> {
    sqlx::query_as::<_, RoomResponse>(&format!(
        "SELECT {PUBLIC_COLUMNS} FROM rooms_public
         WHERE available = TRUE
         ORDER BY rating DESC
         LIMIT $1"
    ))
    .bind(FEATURED_LIMIT)
    .fetch_all(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Fetch a single room through the public view.
pub async fn get_public(pool: &Pool<Postgres>, id: Uuid) -> Result<RoomResponse, AppError> {
    sqlx::query_as::<_, RoomResponse>(&format!(
        "SELECT {PUBLIC_COLUMNS} FROM rooms_public WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .ok_or_else(|| AppError::not_found("Room not found"))
}

/// Fetch a full room row, contact columns included. Admin flows only.
pub async fn get_full(pool: &Pool<Postgres>, id: Uuid) -> Result<Room, AppError> {
    sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?
        .ok_or_else(|| AppError::not_found("Room not found"))
}

/// List full room rows for the admin table, newest first.
pub async fn list_full(pool: &Pool<Postgres>) -> Result<Vec<Room>, AppError> {
    sqlx::query_as::<_, Room>("SELECT * FROM rooms ORDER BY created_at DESC")
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

pub async fn create(pool: &Pool<Postgres>, req: CreateRoomRequest) -> Result<Room, AppError> {
    if !shared_types::is_valid_room_type(&req.room_type) {
        return Err(AppError::bad_request(format!(
            "Invalid room type '{}'",
            req.room_type
        )));
    }
    if !shared_types::is_valid_gender_preference(&req.gender_preference) {
        return Err(AppError::bad_request(format!(
            "Invalid gender preference '{}'",
            req.gender_preference
        )));
    }
    if req.current_occupancy < 0 || req.current_occupancy > req.capacity {
        return Err(AppError::bad_request(
            "Current occupancy must be between 0 and the room's capacity",
        ));
    }

    sqlx::query_as::<_, Room>(
        r#"INSERT INTO rooms
               (title, description, price, original_price, location, room_type,
                gender_preference, capacity, current_occupancy, available,
                facilities, images, contact_person, contact_phone)
           VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
           RETURNING *"#,
    )
    .bind(&req.title)
    .bind(&req.description)
    .bind(req.price)
    .bind(req.original_price)
    .bind(&req.location)
    .bind(&req.room_type)
    .bind(&req.gender_preference)
    .bind(req.capacity)
    .bind(req.current_occupancy)
    .bind(req.available)
    .bind(&req.facilities)
    .bind(&req.images)
    .bind(&req.contact_person)
    .bind(&req.contact_phone)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Partial update: unset fields keep their current value.
pub async fn update(
    pool: &Pool<Postgres>,
    id: Uuid,
    req: UpdateRoomRequest,
) -> Result<Room, AppError> {
    if let Some(room_type) = req.room_type.as_deref() {
        if !shared_types::is_valid_room_type(room_type) {
            return Err(AppError::bad_request(format!(
                "Invalid room type '{room_type}'"
            )));
        }
    }
    if let Some(pref) = req.gender_preference.as_deref() {
        if !shared_types::is_valid_gender_preference(pref) {
            return Err(AppError::bad_request(format!(
                "Invalid gender preference '{pref}'"
            )));
        }
    }

    let current = get_full(pool, id).await?;

    let capacity = req.capacity.unwrap_or(current.capacity);
    let occupancy = req.current_occupancy.unwrap_or(current.current_occupancy);
    if occupancy < 0 || occupancy > capacity {
        return Err(AppError::bad_request(
            "Current occupancy must be between 0 and the room's capacity",
        ));
    }

    sqlx::query_as::<_, Room>(
        r#"UPDATE rooms SET
               title = $2, description = $3, price = $4, original_price = $5,
               location = $6, room_type = $7, gender_preference = $8,
               capacity = $9, current_occupancy = $10, available = $11,
               facilities = $12, images = $13, contact_person = $14,
               contact_phone = $15, updated_at = now()
           WHERE id = $1
           RETURNING *"#,
    )
    .bind(id)
    .bind(req.title.unwrap_or(current.title))
    .bind(req.description.or(current.description))
    .bind(req.price.unwrap_or(current.price))
    .bind(req.original_price.or(current.original_price))
    .bind(req.location.unwrap_or(current.location))
    .bind(req.room_type.unwrap_or(current.room_type))
    .bind(req.gender_preference.unwrap_or(current.gender_preference))
    .bind(capacity)
    .bind(occupancy)
    .bind(req.available.unwrap_or(current.available))
    .bind(req.facilities.unwrap_or(current.facilities))
    .bind(req.images.unwrap_or(current.images))
    .bind(req.contact_person.or(current.contact_person))
    .bind(req.contact_phone.or(current.contact_phone))
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

/// Delete a room. Existing bookings keep their rows with `room_id` nulled
/// by the FK's ON DELETE SET NULL.
pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    if result.rows_affected() == 0 {
        return Err(AppError::not_found("Room not found"));
    }
    Ok(())
}

/// Counts for the admin overview cards.
pub async fn stats(pool: &Pool<Postgres>) -> Result<AdminStats, AppError> {
    sqlx::query_as::<_, AdminStats>(
        r#"SELECT
               (SELECT COUNT(*) FROM rooms) AS total_rooms,
               (SELECT COUNT(*) FROM rooms WHERE available) AS available_rooms,
               (SELECT COUNT(*) FROM bookings) AS total_bookings,
               (SELECT COUNT(*) FROM bookings WHERE status = 'pending') AS pending_bookings"#,
    )
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}
