use dioxus::prelude::*;
use shared_types::{CreateRoomRequest, Room, RoomQuery, RoomResponse, UpdateRoomRequest};
use uuid::Uuid;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Public catalog listing with optional filters.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_rooms(query: RoomQuery) -> Result<Vec<RoomResponse>, ServerFnError> {
    let db = get_db().await;
    crate::repo::room::list_public(db, &query)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Landing-page strip: at most six available rooms, best rated first.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn featured_rooms() -> Result<Vec<RoomResponse>, ServerFnError> {
    let db = get_db().await;
    crate::repo::room::featured(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Room detail through the public view — owner contact stays server-side.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_room(id: Uuid) -> Result<RoomResponse, ServerFnError> {
    let db = get_db().await;
    crate::repo::room::get_public(db, id)
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Admin table listing with full rows, contact columns included.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_rooms_admin() -> Result<Vec<Room>, ServerFnError> {
    require_admin()?;
    let db = get_db().await;
    crate::repo::room::list_full(db)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn create_room(req: CreateRoomRequest) -> Result<Room, ServerFnError> {
    require_admin()?;
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    crate::repo::room::create(db, req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_room(id: Uuid, req: UpdateRoomRequest) -> Result<Room, ServerFnError> {
    require_admin()?;
    let db = get_db().await;
    crate::repo::room::update(db, id, req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn delete_room(id: Uuid) -> Result<(), ServerFnError> {
    require_admin()?;
    let db = get_db().await;
    crate::repo::room::delete(db, id)
        .await
        .map_err(|e| e.into_server_fn_error())
}
