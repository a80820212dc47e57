/**
 * Authentication Middleware
 *
 * This module resolves the session token carried by a request into a user.
 * Tokens arrive either as `Authorization: Bearer <token>` (native client)
 * or as the `hunt_session` cookie (browser flow).
 *
 * Two flavors are provided:
 * - `CurrentUser` - extractor that rejects when no valid session is present
 * - `optional_session_user` - helper for endpoints where a session is
 *   optional (voting, forum posting with the demo fallback)
 */

use axum::extract::FromRequestParts;
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use sqlx::PgPool;

use crate::backend::auth::sessions::{delete_session, get_session, SESSION_COOKIE};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::server::state::AppState;
use crate::shared::models::UserPublic;

/// Pull the session token out of the request headers
///
/// Checks `Authorization: Bearer <token>` first, then the `hunt_session`
/// cookie. Returns None when neither is present.
pub fn session_token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            if !token.is_empty() {
                return Some(token.to_string());
            }
        }
    }

    let cookies = headers.get(COOKIE).and_then(|h| h.to_str().ok())?;
    cookies.split(';').find_map(|pair| {
        pair.trim()
            .strip_prefix(SESSION_COOKIE)
            .and_then(|rest| rest.strip_prefix('='))
            .filter(|token| !token.is_empty())
            .map(|token| token.to_string())
    })
}

/// Resolve the request's session into a user, if there is one
///
/// Missing, unknown, and expired tokens all resolve to `Ok(None)`; only
/// database failures surface as errors. Expired sessions are deleted when
/// first seen.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `headers` - Request headers
pub async fn optional_session_user(
    pool: &PgPool,
    headers: &HeaderMap,
) -> Result<Option<UserPublic>, sqlx::Error> {
    let token = match session_token_from_headers(headers) {
        Some(token) => token,
        None => return Ok(None),
    };

    let session = match get_session(pool, &token).await? {
        Some(session) => session,
        None => return Ok(None),
    };

    if session.is_expired() {
        delete_session(pool, &token).await?;
        return Ok(None);
    }

    let user = get_user_by_id(pool, session.user_id).await?;
    Ok(user.map(|u| u.to_public()))
}

/// Currently signed-in user, resolved from the session token
///
/// # Rejections
///
/// - `401 Unauthorized` - token missing, unknown, expired, or its user is
///   gone
/// - `503 Service Unavailable` - database not configured
/// - `500 Internal Server Error` - database failure during lookup
#[derive(Clone, Debug)]
pub struct CurrentUser(pub UserPublic);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token_from_headers(&parts.headers).ok_or_else(|| {
            tracing::warn!("Missing session token");
            StatusCode::UNAUTHORIZED
        })?;

        let pool = state.db_pool.as_ref().ok_or_else(|| {
            tracing::error!("Database not configured");
            StatusCode::SERVICE_UNAVAILABLE
        })?;

        let session = get_session(pool, &token)
            .await
            .map_err(|e| {
                tracing::error!("Session lookup failed: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or_else(|| {
                tracing::warn!("Unknown session token");
                StatusCode::UNAUTHORIZED
            })?;

        if session.is_expired() {
            if let Err(e) = delete_session(pool, &token).await {
                tracing::warn!("Failed to delete expired session: {:?}", e);
            }
            return Err(StatusCode::UNAUTHORIZED);
        }

        let user = get_user_by_id(pool, session.user_id)
            .await
            .map_err(|e| {
                tracing::error!("User lookup failed: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or_else(|| {
                tracing::warn!("Session user {} no longer exists", session.user_id);
                StatusCode::UNAUTHORIZED
            })?;

        Ok(CurrentUser(user.to_public()))
    }
}
