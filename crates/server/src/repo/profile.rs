use chrono::{DateTime, Utc};
use shared_types::{AppError, AuthUser};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// Internal row shape; the password hash never leaves this module except
/// through [`verify_credentials`].
#[derive(Debug, sqlx::FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProfileRow> for AuthUser {
    fn from(row: ProfileRow) -> Self {
        AuthUser {
            id: row.id,
            email: row.email,
            full_name: row.full_name,
            phone: row.phone,
            role: row.role,
            created_at: row.created_at,
        }
    }
}

const COLUMNS: &str = "id, email, password_hash, full_name, phone, role, created_at";

pub async fn create(
    pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    full_name: &str,
    phone: Option<&str>,
) -> Result<ProfileRow, AppError> {
    sqlx::query_as::<_, ProfileRow>(&format!(
        "INSERT INTO profiles (email, password_hash, full_name, phone)
         VALUES ($1, $2, $3, $4)
         RETURNING {COLUMNS}"
    ))
    .bind(email)
    .bind(password_hash)
    .bind(full_name)
    .bind(phone)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_email(
    pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<ProfileRow>, AppError> {
    sqlx::query_as::<_, ProfileRow>(&format!(
        "SELECT {COLUMNS} FROM profiles WHERE lower(email) = lower($1)"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)
}

pub async fn find_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<ProfileRow>, AppError> {
    sqlx::query_as::<_, ProfileRow>(&format!("SELECT {COLUMNS} FROM profiles WHERE id = $1"))
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)
}

/// Check email/password. Returns the profile on success, unauthorized on any
/// mismatch — the error never reveals whether the account exists.
pub async fn verify_credentials(
    pool: &Pool<Postgres>,
    email: &str,
    password: &str,
) -> Result<ProfileRow, AppError> {
    let row = find_by_email(pool, email).await?;
    let row = row.ok_or_else(|| AppError::unauthorized("Invalid email or password"))?;

    let ok = crate::auth::password::verify_password(password, &row.password_hash)
        .map_err(|e| AppError::internal(e.to_string()))?;
    if !ok {
        return Err(AppError::unauthorized("Invalid email or password"));
    }
    Ok(row)
}

pub async fn update_profile(
    pool: &Pool<Postgres>,
    id: Uuid,
    full_name: &str,
    phone: Option<&str>,
) -> Result<ProfileRow, AppError> {
    sqlx::query_as::<_, ProfileRow>(&format!(
        "UPDATE profiles SET full_name = $2, phone = $3, updated_at = now()
         WHERE id = $1
         RETURNING {COLUMNS}"
    ))
    .bind(id)
    .bind(full_name)
    .bind(phone)
    .fetch_optional(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?
    .ok_or_else(|| AppError::not_found("Profile not found"))
}
