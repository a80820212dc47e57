//! Authentication API integration tests
//!
//! Covers the OAuth sign-in flow end to end against a mock identity
//! provider, plus session handling on /api/auth/me and signout.

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::header::{COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{HeaderValue, StatusCode};
    use serial_test::serial;

    use dapphunt::shared::models::{Role, SessionResponse, UserPublic, UserStats};

    use crate::assert_contains;
    use crate::common::auth_helpers::{create_unique_test_user, session_cookie};
    use crate::common::database::TestDatabase;
    use crate::common::mock_server::{
        mock_identity_provider, oauth_config_for, offline_oauth, test_server,
        test_server_without_db,
    };

    #[tokio::test]
    async fn test_signin_without_credentials_is_unavailable() {
        let server = test_server_without_db();

        let response = server.get("/api/auth/signin").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Sign-in is not configured");
        assert_eq!(body["status"], 503);
    }

    #[tokio::test]
    async fn test_signin_redirects_to_the_provider() {
        let server = test_server(None, offline_oauth());

        let response = server.get("/api/auth/signin").await;

        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        let location = response.header(LOCATION);
        let location = location.to_str().unwrap();
        assert!(location.starts_with("https://provider.invalid/auth?"));
        assert_contains!(location, "client_id=client-123");
        assert_contains!(location, "response_type=code");
        assert_contains!(location, "state=");
    }

    #[tokio::test]
    async fn test_callback_with_provider_error_is_unauthorized() {
        let server = test_server_without_db();

        let response = server
            .get("/api/auth/callback")
            .add_query_param("error", "access_denied")
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Sign-in failed: access_denied");
    }

    #[tokio::test]
    async fn test_callback_without_code_is_bad_request() {
        let server = test_server_without_db();

        let response = server.get("/api/auth/callback").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Missing authorization code");
    }

    #[tokio::test]
    async fn test_callback_without_database_is_unavailable() {
        let server = test_server(None, offline_oauth());

        let response = server
            .get("/api/auth/callback")
            .add_query_param("code", "code-abc")
            .await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_get_me_without_token_is_unauthorized() {
        let server = test_server_without_db();

        let response = server.get("/api/auth/me").await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_get_me_with_token_but_no_database_is_unavailable() {
        let server = test_server_without_db();

        let response = server
            .get("/api/auth/me")
            .authorization_bearer("tok-123")
            .await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_signout_without_token_is_unauthorized() {
        let server = test_server_without_db();

        let response = server.post("/api/auth/signout").await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_full_sign_in_flow_against_a_mock_provider() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let provider = mock_identity_provider("hunter@example.com", "Hunter").await;
        let server = test_server(
            Some(db.pool().clone()),
            oauth_config_for(&provider.uri()),
        );

        // Callback: code exchange, user creation, session cookie
        let response = server
            .get("/api/auth/callback")
            .add_query_param("code", "code-abc")
            .add_query_param("state", "state-xyz")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let cookie = response.header(SET_COOKIE);
        let cookie = cookie.to_str().unwrap();
        assert_contains!(cookie, "hunt_session=");
        assert_contains!(cookie, "HttpOnly");

        let session: SessionResponse = response.json();
        assert!(!session.token.is_empty());
        assert_eq!(session.user.email, "hunter@example.com");
        assert_eq!(session.user.name.as_deref(), Some("Hunter"));
        assert_eq!(session.user.role, Role::User);
        assert!(session.user.username.is_some());

        // The token works as a bearer header
        let response = server
            .get("/api/auth/me")
            .authorization_bearer(&session.token)
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let me: UserPublic = response.json();
        assert_eq!(me.id, session.user.id);

        // Signout destroys the session and expires the cookie
        let response = server
            .post("/api/auth/signout")
            .authorization_bearer(&session.token)
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Signed out");
        let expired = response.header(SET_COOKIE);
        assert_contains!(expired.to_str().unwrap(), "Max-Age=0");

        // The token no longer resolves
        let response = server
            .get("/api/auth/me")
            .authorization_bearer(&session.token)
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_second_sign_in_reuses_the_account() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let provider = mock_identity_provider("hunter@example.com", "Hunter").await;
        let server = test_server(
            Some(db.pool().clone()),
            oauth_config_for(&provider.uri()),
        );

        let first: SessionResponse = server
            .get("/api/auth/callback")
            .add_query_param("code", "code-1")
            .await
            .json();
        let second: SessionResponse = server
            .get("/api/auth/callback")
            .add_query_param("code", "code-2")
            .await
            .json();

        assert_eq!(first.user.id, second.user.id);
        assert_ne!(first.token, second.token);

        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(users, 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_session_cookie_authenticates_requests() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), offline_oauth());

        let response = server
            .get("/api/auth/me")
            .add_header(
                COOKIE,
                HeaderValue::from_str(&session_cookie(&user.token)).unwrap(),
            )
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let me: UserPublic = response.json();
        assert_eq!(me.email, user.email);
        assert_eq!(me.username.as_deref(), Some(user.username.as_str()));
    }

    #[tokio::test]
    #[serial]
    async fn test_fresh_account_has_zero_activity() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), offline_oauth());

        let response = server
            .get("/api/auth/me/stats")
            .authorization_bearer(&user.token)
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let stats: UserStats = response.json();
        assert_eq!(stats.votes_cast, 0);
        assert_eq!(stats.submissions_made, 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_signout_with_unknown_token_still_succeeds() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let server = test_server(Some(db.pool().clone()), offline_oauth());

        let response = server
            .post("/api/auth/signout")
            .authorization_bearer("not-a-real-token")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Signed out");
    }
}
