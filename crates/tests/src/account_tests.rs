use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

// Account flows run through Dioxus server functions, so these tests exercise
// the repository layer they delegate to.

#[tokio::test]
async fn create_profile_and_sign_in() {
    let (_app, pool, _guard) = common::test_app().await;

    let hash = server::auth::password::hash_password("correct horse").unwrap();
    let created =
        server::repo::profile::create(&pool, "priya@test.com", &hash, "Priya Sharma", None)
            .await
            .unwrap();
    assert_eq!(created.email, "priya@test.com");
    assert_eq!(created.role, "user");

    let row = server::repo::profile::verify_credentials(&pool, "priya@test.com", "correct horse")
        .await
        .unwrap();
    assert_eq!(row.id, created.id);
}

#[tokio::test]
async fn email_lookup_is_case_insensitive() {
    let (_app, pool, _guard) = common::test_app().await;

    let hash = server::auth::password::hash_password("correct horse").unwrap();
    server::repo::profile::create(&pool, "Priya@Test.com", &hash, "Priya Sharma", None)
        .await
        .unwrap();

    let found = server::repo::profile::find_by_email(&pool, "priya@test.com")
        .await
        .unwrap();
    assert!(found.is_some());
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let (_app, pool, _guard) = common::test_app().await;

    let hash = server::auth::password::hash_password("whatever").unwrap();
    server::repo::profile::create(&pool, "taken@test.com", &hash, "First", None)
        .await
        .unwrap();

    let err = server::repo::profile::create(&pool, "taken@test.com", &hash, "Second", None)
        .await
        .unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Conflict);
}

#[tokio::test]
async fn wrong_password_is_unauthorized_with_uniform_message() {
    let (_app, pool, _guard) = common::test_app().await;

    let hash = server::auth::password::hash_password("correct horse").unwrap();
    server::repo::profile::create(&pool, "priya@test.com", &hash, "Priya Sharma", None)
        .await
        .unwrap();

    let wrong_pw = server::repo::profile::verify_credentials(&pool, "priya@test.com", "battery")
        .await
        .unwrap_err();
    let no_user = server::repo::profile::verify_credentials(&pool, "ghost@test.com", "battery")
        .await
        .unwrap_err();

    assert_eq!(wrong_pw.kind, AppErrorKind::Unauthorized);
    assert_eq!(no_user.kind, AppErrorKind::Unauthorized);
    // Identical message either way, so callers can't probe which emails exist
    assert_eq!(wrong_pw.message, no_user.message);
}

#[tokio::test]
async fn admin_emails_promote_on_login() {
    let (_app, pool, _guard) = common::test_app().await;

    std::env::set_var("ADMIN_EMAILS", "owner@test.com");

    let hash = server::auth::password::hash_password("whatever").unwrap();
    let created = server::repo::profile::create(&pool, "owner@test.com", &hash, "Owner", None)
        .await
        .unwrap();
    assert_eq!(created.role, "user");

    let role =
        server::auth::maybe_promote_admin(&pool, created.id, "owner@test.com", created.role).await;
    assert_eq!(role, "admin");

    let row = server::repo::profile::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(row.role, "admin");

    std::env::remove_var("ADMIN_EMAILS");
}

#[tokio::test]
async fn update_profile_changes_name_and_phone() {
    let (_app, pool, _guard) = common::test_app().await;

    let hash = server::auth::password::hash_password("whatever").unwrap();
    let created = server::repo::profile::create(&pool, "priya@test.com", &hash, "Priya", None)
        .await
        .unwrap();

    let updated = server::repo::profile::update_profile(
        &pool,
        created.id,
        "Priya Sharma",
        Some("+91 98765 43210"),
    )
    .await
    .unwrap();
    assert_eq!(updated.full_name, "Priya Sharma");
    assert_eq!(updated.phone.as_deref(), Some("+91 98765 43210"));
}
