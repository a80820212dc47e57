/**
 * Sign-Out Handler
 *
 * This module implements POST /api/auth/signout, which deletes the
 * caller's session row and expires the session cookie.
 */

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{AppendHeaders, IntoResponse, Json};
use sqlx::PgPool;

use crate::backend::auth::sessions::{delete_session, SESSION_COOKIE};
use crate::backend::middleware::auth::session_token_from_headers;

/// Sign-out handler
///
/// Deletes the session row for the presented token. Unknown tokens still
/// succeed: the client's goal is to end up signed out, and the expired
/// cookie in the response does that either way.
///
/// # Arguments
///
/// * `State(db_pool)` - Database connection pool
/// * `headers` - Request headers carrying the session token
///
/// # Returns
///
/// JSON confirmation with the `hunt_session` cookie expired
///
/// # Errors
///
/// * `401 Unauthorized` - If no session token is present
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If the delete query fails
pub async fn signout(
    State(db_pool): State<Option<PgPool>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, StatusCode> {
    let token = session_token_from_headers(&headers).ok_or_else(|| {
        tracing::warn!("Signout without a session token");
        StatusCode::UNAUTHORIZED
    })?;

    let pool = db_pool.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    match delete_session(pool, &token).await {
        Ok(0) => tracing::debug!("Signout for an unknown session token"),
        Ok(_) => tracing::info!("Session destroyed"),
        Err(e) => {
            tracing::error!("Failed to delete session: {:?}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    let cookie = format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    );

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(serde_json::json!({ "message": "Signed out" })),
    ))
}
