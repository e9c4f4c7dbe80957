pub mod cookies;
pub mod jwt;
pub mod middleware;
pub mod password;

/// Check if the given email appears in the comma-separated `ADMIN_EMAILS`
/// env var (case-insensitive). Returns `false` when the var is empty or unset.
pub fn is_admin_email(email: &str) -> bool {
    match std::env::var("ADMIN_EMAILS") {
        Ok(admins) => email_in_admin_list(&admins, email),
        Err(_) => false,
    }
}

fn email_in_admin_list(list: &str, email: &str) -> bool {
    if list.is_empty() {
        return false;
    }
    list.split(',')
        .any(|a| a.trim().eq_ignore_ascii_case(email))
}

/// If the email is listed in `ADMIN_EMAILS`, promote the profile to admin in
/// the database. Returns the (possibly updated) role string. DB errors are
/// non-fatal — the current role is returned unchanged on failure.
pub async fn maybe_promote_admin(
    db: &sqlx::PgPool,
    user_id: uuid::Uuid,
    email: &str,
    current_role: String,
) -> String {
    if !is_admin_email(email) || current_role == "admin" {
        return current_role;
    }

    match sqlx::query("UPDATE profiles SET role = 'admin' WHERE id = $1")
        .bind(user_id)
        .execute(db)
        .await
    {
        Ok(_) => {
            tracing::info!(%user_id, email, "Auto-promoted user to admin via ADMIN_EMAILS");
            "admin".to_string()
        }
        Err(e) => {
            tracing::error!(%user_id, email, %e, "Failed to auto-promote admin");
            current_role
        }
    }
}
