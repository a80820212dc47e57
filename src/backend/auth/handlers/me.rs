/**
 * Current User Handlers
 *
 * This module implements GET /api/auth/me and GET /api/auth/me/stats.
 *
 * # Authentication
 *
 * Both endpoints require a valid session, presented either as
 * `Authorization: Bearer <token>` or as the `hunt_session` cookie. The
 * `CurrentUser` extractor performs the lookup and rejects with 401 when
 * no valid session is present.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use sqlx::PgPool;

use crate::backend::auth::users::get_user_stats;
use crate::backend::middleware::auth::CurrentUser;
use crate::shared::models::{UserPublic, UserStats};

/// Get current user handler
///
/// # Arguments
///
/// * `user` - The signed-in user, resolved by the `CurrentUser` extractor
///
/// # Returns
///
/// JSON response with the user's public profile
///
/// # Errors
///
/// * `401 Unauthorized` - If the session token is missing, unknown, or
///   expired
/// * `503 Service Unavailable` - If the database is not configured
///
/// # Example Response
///
/// ```json
/// {
///   "id": "123e4567-e89b-12d3-a456-426614174000",
///   "email": "hunter@example.com",
///   "name": "Hunter",
///   "username": "hunter",
///   "image": null,
///   "role": "USER",
///   "created_at": "2025-04-01T12:00:00Z"
/// }
/// ```
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<UserPublic> {
    tracing::debug!("Session check for user {}", user.id);
    Json(user)
}

/// Get current user's activity counters
///
/// # Arguments
///
/// * `State(db_pool)` - Database connection pool
/// * `user` - The signed-in user, resolved by the `CurrentUser` extractor
///
/// # Returns
///
/// JSON response with vote and submission counts
///
/// # Errors
///
/// * `401 Unauthorized` - If the session token is missing, unknown, or
///   expired
/// * `503 Service Unavailable` - If the database is not configured
/// * `500 Internal Server Error` - If the count queries fail
pub async fn get_my_stats(
    State(db_pool): State<Option<PgPool>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<UserStats>, StatusCode> {
    let pool = db_pool.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let stats = get_user_stats(pool, user.id).await.map_err(|e| {
        tracing::error!("Failed to load stats for user {}: {:?}", user.id, e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(stats))
}
