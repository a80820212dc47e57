/**
 * OAuth Callback Handler
 *
 * This module implements GET /api/auth/callback, the redirect target the
 * provider sends the user back to after consent.
 *
 * # Flow
 *
 * 1. Reject if the provider reported an error (user denied consent)
 * 2. Reject if no authorization code is present
 * 3. Exchange the code for tokens
 * 4. Fetch the user's profile from the userinfo endpoint
 * 5. Find or create the matching user and link the provider account
 * 6. Create a session and return it as both a cookie and a JSON body
 *
 * The JSON body lets native clients capture the token without cookie
 * handling; browsers rely on the `hunt_session` cookie.
 */

use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, IntoResponse, Json};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::auth::oauth::OauthConfig;
use crate::backend::auth::sessions::{create_session, SESSION_COOKIE, SESSION_TTL_DAYS};
use crate::backend::auth::users::find_or_create_oauth_user;
use crate::backend::error::ApiError;
use crate::shared::models::SessionResponse;

/// Provider name recorded on account links.
const PROVIDER: &str = "google";

/// Query parameters the provider appends to the callback URL
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    /// Authorization code, present on success
    #[serde(default)]
    pub code: Option<String>,
    /// State value from the signin redirect
    #[serde(default)]
    pub state: Option<String>,
    /// Error code, present when the user denied consent
    #[serde(default)]
    pub error: Option<String>,
}

/// OAuth callback handler
///
/// # Arguments
///
/// * `State(db_pool)` - Database connection pool
/// * `State(oauth)` - OAuth provider configuration
/// * `Query(params)` - Callback query parameters
///
/// # Returns
///
/// JSON session payload with the `hunt_session` cookie set
///
/// # Errors
///
/// * `401 Unauthorized` - If the provider reported an error
/// * `400 Bad Request` - If no authorization code is present
/// * `503 Service Unavailable` - If the database is not configured
/// * `502 Bad Gateway` - If the token exchange or userinfo fetch fails,
///   or the provider did not report an email
pub async fn oauth_callback(
    State(db_pool): State<Option<PgPool>>,
    State(oauth): State<OauthConfig>,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(error) = params.error {
        tracing::warn!("OAuth provider returned an error: {}", error);
        return Err(ApiError::unauthorized(format!("Sign-in failed: {}", error)));
    }

    let code = params.code.as_deref().filter(|c| !c.is_empty()).ok_or_else(|| {
        tracing::warn!("OAuth callback without an authorization code");
        ApiError::bad_request("Missing authorization code")
    })?;

    let pool = db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let token = oauth.exchange_code(code).await?;
    let info = oauth.fetch_userinfo(&token.access_token).await?;

    let email = info.email.as_deref().filter(|e| !e.is_empty()).ok_or_else(|| {
        tracing::warn!("Provider profile {} has no email", info.sub);
        ApiError::provider("Provider did not return an email address")
    })?;

    let user =
        find_or_create_oauth_user(pool, PROVIDER, &info.sub, email, info.name, info.picture)
            .await?;
    let session = create_session(pool, user.id).await?;

    tracing::info!("User {} signed in", user.id);

    let cookie = format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE,
        session.token,
        SESSION_TTL_DAYS * 24 * 60 * 60
    );

    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(SessionResponse {
            token: session.token,
            user: user.to_public(),
        }),
    ))
}
