// Server-only auth helpers shared across all api/* modules.

use dioxus::prelude::*;
use shared_types::AuthUser;

use crate::db::get_db;
use crate::error_convert::AppErrorExt;

/// Extract and validate the caller's identity from the current request.
/// Checks middleware-injected Claims first, falls back to cookie parsing.
pub(crate) fn require_auth() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let ctx = dioxus::fullstack::FullstackContext::current()
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    let parts = ctx.parts_mut();

    // Primary: Claims already validated by auth middleware
    if let Some(claims) = parts.extensions.get::<jwt::Claims>() {
        return Ok(claims.clone());
    }

    // Fallback: parse access token from cookies/Bearer header
    let headers = parts.headers.clone();
    let token = cookies::extract_access_token(&headers)
        .ok_or_else(|| AppError::unauthorized("Authentication required").into_server_fn_error())?;

    jwt::validate_access_token(&token)
        .map_err(|_| AppError::unauthorized("Invalid or expired token").into_server_fn_error())
}

/// Require the caller to be authenticated with the "admin" role.
/// Fails before any data is read.
pub(crate) fn require_admin() -> Result<crate::auth::jwt::Claims, ServerFnError> {
    use shared_types::AppError;

    let claims = require_auth()?;
    if claims.role != "admin" {
        return Err(AppError::forbidden("Admin role required").into_server_fn_error());
    }
    Ok(claims)
}

/// Fetch the full AuthUser for a validated user ID.
/// Returns None and clears cookies if the profile no longer exists.
pub(crate) async fn fetch_auth_user(
    user_id: uuid::Uuid,
) -> Result<Option<AuthUser>, ServerFnError> {
    let db = get_db().await;
    let row = crate::repo::profile::find_by_id(db, user_id)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    match row {
        Some(profile) => Ok(Some(profile.into())),
        None => {
            // Stale token for a deleted profile — clear cookies so the
            // client doesn't stay stuck in a broken authenticated state
            crate::auth::cookies::schedule_clear_cookies();
            tracing::warn!(%user_id, "Auth token references missing profile, clearing cookies");
            Ok(None)
        }
    }
}
