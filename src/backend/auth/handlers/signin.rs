/**
 * Sign-In Handler
 *
 * This module implements GET /api/auth/signin, which starts the OAuth flow
 * by redirecting the browser to the provider's authorization endpoint.
 *
 * # Flow
 *
 * 1. Check that client credentials are configured
 * 2. Generate a fresh state value
 * 3. Redirect (303) to the provider's authorization URL
 *
 * The state value is carried through the round-trip as an opaque token;
 * the callback does not track it server-side.
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Redirect;
use uuid::Uuid;

use crate::backend::auth::oauth::OauthConfig;
use crate::backend::error::ApiError;

/// Sign-in handler
///
/// # Arguments
///
/// * `State(oauth)` - OAuth provider configuration
///
/// # Returns
///
/// Redirect to the provider's authorization page
///
/// # Errors
///
/// * `503 Service Unavailable` - If client credentials are not configured
/// * `502 Bad Gateway` - If the configured authorization URL is malformed
pub async fn signin(State(oauth): State<OauthConfig>) -> Result<Redirect, ApiError> {
    if !oauth.is_configured() {
        tracing::warn!("Sign-in requested but OAuth credentials are not configured");
        return Err(ApiError::handler(
            StatusCode::SERVICE_UNAVAILABLE,
            "Sign-in is not configured",
        ));
    }

    let state = Uuid::new_v4().to_string();
    let url = oauth.authorize_url(&state)?;

    tracing::info!("Redirecting to OAuth provider for sign-in");
    Ok(Redirect::to(&url))
}
