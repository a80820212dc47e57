/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool and run migrations
 * 2. Load the OAuth provider configuration from the environment
 * 3. Assemble the shared `AppState`
 * 4. Create and configure the router
 * 5. Start the periodic expired-session sweeper
 */

use axum::Router;

use crate::backend::auth::oauth::OauthConfig;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;

/// How often the expired-session sweeper runs.
const SESSION_SWEEP_INTERVAL_SECS: u64 = 3600;

/// Create and configure the Axum application
///
/// This function sets up the Axum HTTP server with:
/// - Database connection pool (if configured)
/// - OAuth provider configuration
/// - Route configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing database: server continues, DB-backed endpoints answer 503
/// - Missing OAuth credentials: server continues, sign-in answers 503
/// - Migration failures: logged but don't prevent startup
pub async fn create_app() -> Router<()> {
    tracing::info!("Initializing DappHunt backend server");

    // Step 1: Load optional services
    let db_pool = load_database().await;

    // Step 2: OAuth provider configuration
    let oauth = OauthConfig::from_env();
    if !oauth.is_configured() {
        tracing::warn!(
            "GOOGLE_CLIENT_ID / GOOGLE_CLIENT_SECRET not set. Sign-in will be disabled."
        );
    }

    // Step 3: Assemble app state
    let app_state = AppState {
        db_pool: db_pool.clone(),
        oauth,
    };

    // Step 4: Create router with all routes
    let app = create_router(app_state);

    // Step 5: Periodically purge expired sessions so the table doesn't grow
    // without bound. Only runs when a database is configured.
    if let Some(pool) = db_pool {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(
                SESSION_SWEEP_INTERVAL_SECS,
            ));
            loop {
                interval.tick().await;
                match crate::backend::auth::sessions::delete_expired_sessions(&pool).await {
                    Ok(0) => {}
                    Ok(n) => tracing::info!("Purged {} expired sessions", n),
                    Err(e) => tracing::warn!("Session sweep failed: {}", e),
                }
            }
        });
        tracing::info!("Expired-session sweeper started");
    }

    app
}
