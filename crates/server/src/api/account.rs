use dioxus::prelude::*;
use shared_types::{AuthUser, MessageResponse};

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, ValidateRequest};

#[cfg(feature = "server")]
use super::auth::*;

/// Issue a token pair for a profile and schedule HTTP-only auth cookies.
/// Returns the access/refresh pair after persisting the refresh hash.
#[cfg(feature = "server")]
async fn issue_session(
    db: &sqlx::PgPool,
    user_id: uuid::Uuid,
    email: &str,
    role: &str,
) -> Result<(), ServerFnError> {
    use crate::auth::{cookies, jwt};
    use shared_types::AppError;

    let access_token = jwt::create_access_token(user_id, email, role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;
    let (refresh_token, expires_at) = jwt::create_refresh_token(user_id, email, role)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    // Store the hash of the refresh token — never persist raw JWTs
    let refresh_hash = jwt::hash_token(&refresh_token);
    sqlx::query("INSERT INTO refresh_tokens (user_id, token_hash, expires_at) VALUES ($1, $2, $3)")
        .bind(user_id)
        .bind(&refresh_hash)
        .bind(expires_at)
        .execute(db)
        .await
        .map_err(|e| crate::error_convert::sqlx_to_app_error(e).into_server_fn_error())?;

    cookies::schedule_auth_cookies(&access_token, &refresh_token);
    Ok(())
}

/// Register a new account. Sets HTTP-only auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn register(
    email: String,
    password: String,
    full_name: String,
    phone: Option<String>,
) -> Result<AuthUser, ServerFnError> {
    use crate::auth::{maybe_promote_admin, password as pw};
    use shared_types::{AppError, RegisterRequest};

    if !crate::config::feature_flags().open_registration {
        return Err(
            AppError::forbidden("Registration is currently closed").into_server_fn_error()
        );
    }

    let req = RegisterRequest {
        email: email.clone(),
        password: password.clone(),
        full_name: full_name.clone(),
        phone: phone.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let password_hash = pw::hash_password(&password)
        .map_err(|e| AppError::internal(e.to_string()).into_server_fn_error())?;

    let db = get_db().await;
    let profile =
        crate::repo::profile::create(db, &email, &password_hash, &full_name, phone.as_deref())
            .await
            .map_err(|e| e.into_server_fn_error())?;

    let role = maybe_promote_admin(db, profile.id, &profile.email, profile.role.clone()).await;

    issue_session(db, profile.id, &profile.email, &role).await?;

    let mut user: AuthUser = profile.into();
    user.role = role;
    Ok(user)
}

/// Login with email and password. Sets HTTP-only auth cookies on success.
#[cfg_attr(feature = "server", tracing::instrument(skip(password)))]
#[server]
pub async fn login(email: String, password: String) -> Result<AuthUser, ServerFnError> {
    use crate::auth::maybe_promote_admin;
    use shared_types::LoginRequest;

    let req = LoginRequest {
        email: email.clone(),
        password: password.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let profile = crate::repo::profile::verify_credentials(db, &email, &password)
        .await
        .map_err(|e| e.into_server_fn_error())?;

    let role = maybe_promote_admin(db, profile.id, &profile.email, profile.role.clone()).await;

    issue_session(db, profile.id, &profile.email, &role).await?;

    tracing::info!(user_id = %profile.id, "Login succeeded");

    let mut user: AuthUser = profile.into();
    user.role = role;
    Ok(user)
}

/// Log out: revoke the caller's refresh tokens and clear auth cookies.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn logout() -> Result<MessageResponse, ServerFnError> {
    // Best-effort: even with no valid session, clear cookies
    if let Ok(claims) = require_auth() {
        let db = get_db().await;
        let _ = sqlx::query("UPDATE refresh_tokens SET revoked = TRUE WHERE user_id = $1")
            .bind(claims.sub)
            .execute(db)
            .await;
    }
    crate::auth::cookies::schedule_clear_cookies();
    Ok(MessageResponse {
        message: "Signed out".to_string(),
    })
}

/// Resolve the current session into an AuthUser, or None when signed out.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_current_user() -> Result<Option<AuthUser>, ServerFnError> {
    let claims = match require_auth() {
        Ok(claims) => claims,
        Err(_) => return Ok(None),
    };
    fetch_auth_user(claims.sub).await
}

/// Update the caller's display name and phone number.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn update_profile(
    full_name: String,
    phone: Option<String>,
) -> Result<AuthUser, ServerFnError> {
    use shared_types::UpdateProfileRequest;

    let claims = require_auth()?;

    let req = UpdateProfileRequest {
        full_name: full_name.clone(),
        phone: phone.clone(),
    };
    req.validate_request()
        .map_err(|e| e.into_server_fn_error())?;

    let db = get_db().await;
    let profile = crate::repo::profile::update_profile(db, claims.sub, &full_name, phone.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())?;

    Ok(profile.into())
}
