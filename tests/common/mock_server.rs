//! Mock identity provider and test server helpers
//!
//! Provides a wiremock-backed OAuth provider (token + userinfo endpoints)
//! and a helper that stands up the full API router behind an
//! `axum_test::TestServer`.

#[cfg(feature = "ssr")]
use axum_test::TestServer;
#[cfg(feature = "ssr")]
use sqlx::PgPool;
#[cfg(feature = "ssr")]
use wiremock::matchers::{method, path};
#[cfg(feature = "ssr")]
use wiremock::{Mock, MockServer, ResponseTemplate};

#[cfg(feature = "ssr")]
use dapphunt::backend::auth::oauth::OauthConfig;
#[cfg(feature = "ssr")]
use dapphunt::backend::routes::router::create_router;
#[cfg(feature = "ssr")]
use dapphunt::backend::server::state::AppState;

/// Start a mock OAuth provider that accepts any code and returns a
/// fixed profile for the given email.
#[cfg(feature = "ssr")]
pub async fn mock_identity_provider(email: &str, name: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "test-access-token",
            "token_type": "Bearer",
            "expires_in": 3599
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "sub": "provider-sub-1",
            "email": email,
            "name": name,
            "picture": "https://example.com/avatar.png"
        })))
        .mount(&server)
        .await;

    server
}

/// OAuth configuration pointed at a mock provider
#[cfg(feature = "ssr")]
pub fn oauth_config_for(base: &str) -> OauthConfig {
    OauthConfig {
        client_id: "client-123".to_string(),
        client_secret: "secret-456".to_string(),
        redirect_url: "http://localhost:3000/api/auth/callback".to_string(),
        auth_url: format!("{}/auth", base),
        token_url: format!("{}/token", base),
        userinfo_url: format!("{}/userinfo", base),
    }
}

/// OAuth configuration with no credentials, as on a fresh checkout
#[cfg(feature = "ssr")]
pub fn unconfigured_oauth() -> OauthConfig {
    OauthConfig {
        client_id: String::new(),
        client_secret: String::new(),
        redirect_url: "http://localhost:3000/api/auth/callback".to_string(),
        auth_url: "https://provider.invalid/auth".to_string(),
        token_url: "https://provider.invalid/token".to_string(),
        userinfo_url: "https://provider.invalid/userinfo".to_string(),
    }
}

/// OAuth configuration with credentials but endpoints nothing listens on
#[cfg(feature = "ssr")]
pub fn offline_oauth() -> OauthConfig {
    OauthConfig {
        client_id: "client-123".to_string(),
        client_secret: "secret-456".to_string(),
        ..unconfigured_oauth()
    }
}

/// Stand up the API router behind an in-process test server
#[cfg(feature = "ssr")]
pub fn test_server(db_pool: Option<PgPool>, oauth: OauthConfig) -> TestServer {
    let app = create_router(AppState { db_pool, oauth });
    TestServer::new(app).expect("Failed to start test server")
}

/// Test server with no database, exercising degraded mode
#[cfg(feature = "ssr")]
pub fn test_server_without_db() -> TestServer {
    test_server(None, unconfigured_oauth())
}
