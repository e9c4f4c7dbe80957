use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::db::AppState;
use shared_types::{
    AdminBookingResponse, AdminStats, AppError, AppErrorKind, Booking, BookingResponse,
    CreateBookingRequest, CreateRoomRequest, Room, RoomResponse, UpdateBookingStatusRequest,
    UpdateRoomRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::rest::room::list_rooms,
        crate::rest::room::featured_rooms,
        crate::rest::room::get_room,
        crate::rest::room::list_rooms_admin,
        crate::rest::room::create_room,
        crate::rest::room::update_room,
        crate::rest::room::delete_room,
        crate::rest::room::admin_stats,
        crate::rest::booking::create_booking,
        crate::rest::booking::my_bookings,
        crate::rest::booking::list_bookings_admin,
        crate::rest::booking::update_booking_status,
        crate::health::health_check,
    ),
    components(schemas(
        AppError,
        AppErrorKind,
        Room,
        RoomResponse,
        CreateRoomRequest,
        UpdateRoomRequest,
        Booking,
        BookingResponse,
        AdminBookingResponse,
        CreateBookingRequest,
        UpdateBookingStatusRequest,
        AdminStats,
        crate::health::HealthResponse,
    )),
    tags(
        (name = "rooms", description = "Public room catalog"),
        (name = "bookings", description = "Booking lifecycle"),
        (name = "admin", description = "Administration"),
        (name = "health", description = "Service health"),
    ),
    info(
        title = "RoomNest API",
        description = "Student housing listing and booking API",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;

/// Swagger UI router, mounted only when the `docs` feature flag is on.
pub fn docs_router() -> Router<AppState> {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
