use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use shared_types::{
    AdminStats, AppError, CreateRoomRequest, Room, RoomQuery, RoomResponse, UpdateRoomRequest,
};

use super::AdminClaims;
use crate::error_convert::ValidateRequest;
use crate::repo;

/// GET /api/rooms — public catalog with optional filters.
#[utoipa::path(
    get,
    path = "/api/rooms",
    params(RoomQuery),
    responses(
        (status = 200, description = "Matching rooms", body = Vec<RoomResponse>)
    ),
    tag = "rooms"
)]
pub async fn list_rooms(
    State(pool): State<Pool<Postgres>>,
    Query(query): Query<RoomQuery>,
) -> Result<Json<Vec<RoomResponse>>, AppError> {
    let rooms = repo::room::list_public(&pool, &query).await?;
    Ok(Json(rooms))
}

/// GET /api/rooms/featured — at most six available rooms, best rated first.
#[utoipa::path(
    get,
    path = "/api/rooms/featured",
    responses(
        (status = 200, description = "Featured rooms", body = Vec<RoomResponse>)
    ),
    tag = "rooms"
)]
pub async fn featured_rooms(
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<RoomResponse>>, AppError> {
    let rooms = repo::room::featured(&pool).await?;
    Ok(Json(rooms))
}

/// GET /api/rooms/{id}
#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room detail", body = RoomResponse),
        (status = 404, description = "Room not found", body = AppError)
    ),
    tag = "rooms"
)]
pub async fn get_room(
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoomResponse>, AppError> {
    let room = repo::room::get_public(&pool, id).await?;
    Ok(Json(room))
}

/// GET /api/admin/rooms — full rows, contact columns included.
#[utoipa::path(
    get,
    path = "/api/admin/rooms",
    responses(
        (status = 200, description = "All rooms", body = Vec<Room>),
        (status = 403, description = "Admin role required", body = AppError)
    ),
    tag = "admin"
)]
pub async fn list_rooms_admin(
    _admin: AdminClaims,
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<Vec<Room>>, AppError> {
    let rooms = repo::room::list_full(&pool).await?;
    Ok(Json(rooms))
}

/// POST /api/rooms
#[utoipa::path(
    post,
    path = "/api/rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 422, description = "Validation failed", body = AppError)
    ),
    tag = "admin"
)]
pub async fn create_room(
    _admin: AdminClaims,
    State(pool): State<Pool<Postgres>>,
    Json(body): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), AppError> {
    body.validate_request()?;
    let room = repo::room::create(&pool, body).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

/// PUT /api/rooms/{id}
#[utoipa::path(
    put,
    path = "/api/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 404, description = "Room not found", body = AppError)
    ),
    tag = "admin"
)]
pub async fn update_room(
    _admin: AdminClaims,
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateRoomRequest>,
) -> Result<Json<Room>, AppError> {
    let room = repo::room::update(&pool, id, body).await?;
    Ok(Json(room))
}

/// DELETE /api/rooms/{id}
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    params(("id" = Uuid, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found", body = AppError)
    ),
    tag = "admin"
)]
pub async fn delete_room(
    _admin: AdminClaims,
    State(pool): State<Pool<Postgres>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    repo::room::delete(&pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/admin/stats
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Admin overview counts", body = AdminStats),
        (status = 403, description = "Admin role required", body = AppError)
    ),
    tag = "admin"
)]
pub async fn admin_stats(
    _admin: AdminClaims,
    State(pool): State<Pool<Postgres>>,
) -> Result<Json<AdminStats>, AppError> {
    let stats = repo::room::stats(&pool).await?;
    Ok(Json(stats))
}
