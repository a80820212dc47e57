/**
 * Session Management
 *
 * Database-backed sessions. Each successful sign-in inserts a row keyed by
 * an opaque token; the token travels back either as the `hunt_session`
 * cookie (browser flow) or as a bearer token (native client).
 *
 * Sessions expire after 30 days. Expired rows are deleted when first seen
 * and swept hourly by the background task started in `server::init`.
 */

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Session lifetime in days
pub const SESSION_TTL_DAYS: i64 = 30;

/// Name of the session cookie set by the OAuth callback
pub const SESSION_COOKIE: &str = "hunt_session";

/// Session row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Session {
    /// Unique session ID
    pub id: Uuid,
    /// Opaque token presented by the client
    pub token: String,
    /// Owning user
    pub user_id: Uuid,
    /// Expiry timestamp
    pub expires: DateTime<Utc>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Whether this session's expiry has passed
    pub fn is_expired(&self) -> bool {
        self.expires <= Utc::now()
    }
}

/// Create a session for a user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user_id` - User the session belongs to
///
/// # Returns
/// The created session, including its fresh token
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<Session, sqlx::Error> {
    let id = Uuid::new_v4();
    let token = Uuid::new_v4().to_string();
    let now = Utc::now();
    let expires = now + Duration::days(SESSION_TTL_DAYS);

    let session = sqlx::query_as::<_, Session>(
        r#"
        INSERT INTO sessions (id, token, user_id, expires, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, token, user_id, expires, created_at
        "#,
    )
    .bind(id)
    .bind(&token)
    .bind(user_id)
    .bind(expires)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(session)
}

/// Look up a session by token
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `token` - Opaque session token
///
/// # Returns
/// Session or None if the token is unknown
pub async fn get_session(pool: &PgPool, token: &str) -> Result<Option<Session>, sqlx::Error> {
    let session = sqlx::query_as::<_, Session>(
        r#"
        SELECT id, token, user_id, expires, created_at
        FROM sessions
        WHERE token = $1
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(session)
}

/// Delete a session by token
///
/// # Returns
/// Number of rows deleted (0 when the token was unknown)
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM sessions WHERE token = $1"#)
        .bind(token)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Delete every session whose expiry has passed
///
/// # Returns
/// Number of rows deleted
pub async fn delete_expired_sessions(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM sessions WHERE expires <= $1"#)
        .bind(Utc::now())
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
