/**
 * OAuth Provider Client
 *
 * This module talks to the OAuth 2.0 identity provider (Google by default):
 * building the authorization redirect URL, exchanging the callback code for
 * tokens, and fetching the user's profile.
 *
 * # Configuration
 *
 * All endpoints and credentials come from the environment:
 * - `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET` - client credentials
 * - `OAUTH_REDIRECT_URL` - callback URL registered with the provider
 * - `OAUTH_AUTH_URL` / `OAUTH_TOKEN_URL` / `OAUTH_USERINFO_URL` - provider
 *   endpoints, overridable so tests can point them at a local mock server
 *
 * # Error Handling
 *
 * Network failures and non-success provider responses surface as
 * `ApiError::Provider`, which maps to 502 Bad Gateway.
 */

use serde::Deserialize;

use crate::backend::error::ApiError;

/// Google's OAuth 2.0 endpoints, used when no override is set.
const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

/// Scopes requested during sign-in.
const OAUTH_SCOPE: &str = "openid email profile";

/// OAuth provider configuration
///
/// Held in `AppState` and extracted by the auth handlers via `FromRef`.
#[derive(Clone, Debug)]
pub struct OauthConfig {
    /// OAuth client ID
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Callback URL registered with the provider
    pub redirect_url: String,
    /// Authorization endpoint (user-facing redirect target)
    pub auth_url: String,
    /// Token exchange endpoint
    pub token_url: String,
    /// Userinfo endpoint
    pub userinfo_url: String,
}

/// Token endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for the userinfo request
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Userinfo endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct OauthUserInfo {
    /// Stable account ID assigned by the provider
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub email_verified: Option<bool>,
}

impl OauthConfig {
    /// Load the OAuth configuration from environment variables
    ///
    /// Missing credentials leave the config unconfigured rather than
    /// failing startup; `is_configured` reports that state and the signin
    /// handler answers 503.
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            client_secret: std::env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            redirect_url: std::env::var("OAUTH_REDIRECT_URL")
                .unwrap_or_else(|_| "http://localhost:3000/api/auth/callback".to_string()),
            auth_url: std::env::var("OAUTH_AUTH_URL")
                .unwrap_or_else(|_| GOOGLE_AUTH_URL.to_string()),
            token_url: std::env::var("OAUTH_TOKEN_URL")
                .unwrap_or_else(|_| GOOGLE_TOKEN_URL.to_string()),
            userinfo_url: std::env::var("OAUTH_USERINFO_URL")
                .unwrap_or_else(|_| GOOGLE_USERINFO_URL.to_string()),
        }
    }

    /// Whether client credentials are present
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// Build the authorization URL the user is redirected to
    ///
    /// # Arguments
    /// * `state` - Opaque value echoed back by the provider on callback
    pub fn authorize_url(&self, state: &str) -> Result<String, ApiError> {
        let url = reqwest::Url::parse_with_params(
            &self.auth_url,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", OAUTH_SCOPE),
                ("state", state),
            ],
        )
        .map_err(|e| ApiError::provider(format!("Invalid authorization URL: {}", e)))?;

        Ok(url.to_string())
    }

    /// Exchange an authorization code for tokens
    ///
    /// # Arguments
    /// * `code` - Authorization code from the callback query string
    ///
    /// # Returns
    /// Token response, or `ApiError::Provider` on any failure
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, ApiError> {
        let params = [
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_url.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = reqwest::Client::new()
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| ApiError::provider(format!("Token exchange request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Token exchange rejected with status {}: {}", status, body);
            return Err(ApiError::provider(format!(
                "Token exchange failed with status {}",
                status
            )));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ApiError::provider(format!("Invalid token response: {}", e)))
    }

    /// Fetch the signed-in user's profile from the userinfo endpoint
    ///
    /// # Arguments
    /// * `access_token` - Bearer token from `exchange_code`
    pub async fn fetch_userinfo(&self, access_token: &str) -> Result<OauthUserInfo, ApiError> {
        let response = reqwest::Client::new()
            .get(&self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ApiError::provider(format!("Userinfo request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("Userinfo request rejected with status {}", status);
            return Err(ApiError::provider(format!(
                "Userinfo request failed with status {}",
                status
            )));
        }

        response
            .json::<OauthUserInfo>()
            .await
            .map_err(|e| ApiError::provider(format!("Invalid userinfo response: {}", e)))
    }
}
