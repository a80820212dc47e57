/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - An optional PostgreSQL connection pool
 * - The OAuth provider configuration used by the sign-in flow
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. Most handlers
 * only take `State(db_pool): State<Option<PgPool>>`; the auth handlers
 * additionally extract the `OauthConfig`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::oauth::OauthConfig;

/// Application state shared across all request handlers
///
/// # Fields
///
/// * `db_pool` - Optional PostgreSQL database connection pool
/// * `oauth` - OAuth provider endpoints and client credentials
///
/// # Degraded Mode
///
/// `db_pool` is `None` when `DATABASE_URL` is not set or the connection
/// fails at startup. Handlers that need the database respond with
/// `503 Service Unavailable` in that case instead of panicking, which keeps
/// the validation-only paths reachable in tests and demos.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    ///
    /// This is `None` if the database is not configured. Handlers should
    /// check for `None` before using the database.
    pub db_pool: Option<PgPool>,

    /// OAuth provider configuration for the sign-in flow
    pub oauth: OauthConfig,
}

/// Implement FromRef for Option<PgPool>
///
/// This allows Axum handlers to extract the optional database pool
/// directly from `AppState`.
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for OauthConfig
///
/// This allows the auth handlers to extract the OAuth configuration
/// directly from `AppState`.
impl FromRef<AppState> for OauthConfig {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.oauth.clone()
    }
}
