//! Authentication test helpers
//!
//! Provides utilities for creating test users with live sessions, promoting
//! users to admin, and building session cookies.

#[cfg(feature = "ssr")]
use sqlx::PgPool;
#[cfg(feature = "ssr")]
use uuid::Uuid;

#[cfg(feature = "ssr")]
use dapphunt::backend::auth::sessions::{create_session, SESSION_COOKIE};
#[cfg(feature = "ssr")]
use dapphunt::backend::auth::users::{create_user, generate_username};
#[cfg(feature = "ssr")]
use dapphunt::backend::forum::handlers::DEMO_USER_EMAIL;

/// A user created for a test, with a session token already issued
#[cfg(feature = "ssr")]
pub struct TestUser {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub token: String,
}

/// Create a user and a session for them
#[cfg(feature = "ssr")]
pub async fn create_test_user(
    pool: &PgPool,
    email: &str,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let username = generate_username(pool, email).await?;
    let user = create_user(
        pool,
        email.to_string(),
        Some("Test User".to_string()),
        None,
        Some(username.clone()),
    )
    .await?;
    let session = create_session(pool, user.id).await?;

    Ok(TestUser {
        id: user.id,
        email: user.email,
        username,
        token: session.token,
    })
}

/// Create a user with a unique email
#[cfg(feature = "ssr")]
pub async fn create_unique_test_user(
    pool: &PgPool,
) -> Result<TestUser, Box<dyn std::error::Error>> {
    let email = format!("test_{}@example.com", Uuid::new_v4());
    create_test_user(pool, &email).await
}

/// Create a user and promote them to admin
#[cfg(feature = "ssr")]
pub async fn create_admin_user(pool: &PgPool) -> Result<TestUser, Box<dyn std::error::Error>> {
    let user = create_unique_test_user(pool).await?;
    sqlx::query("UPDATE users SET role = 'ADMIN' WHERE id = $1")
        .bind(user.id)
        .execute(pool)
        .await?;
    Ok(user)
}

/// Create the demo user that anonymous forum posts fall back to
#[cfg(feature = "ssr")]
pub async fn create_demo_user(pool: &PgPool) -> Result<Uuid, Box<dyn std::error::Error>> {
    let user = create_user(
        pool,
        DEMO_USER_EMAIL.to_string(),
        Some("Demo User".to_string()),
        None,
        Some("demo".to_string()),
    )
    .await?;
    Ok(user.id)
}

/// Build a `Cookie` header value carrying a session token
#[cfg(feature = "ssr")]
pub fn session_cookie(token: &str) -> String {
    format!("{}={}", SESSION_COOKIE, token)
}

/// Build an `Authorization` header value carrying a session token
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
