/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * Routes are added in a specific order to ensure proper matching:
 * 1. API routes (auth, projects, votes, leaderboard, submissions, forum,
 *    categories)
 * 2. Static file serving
 * 3. Fallback handler (404)
 */

use axum::Router;
use tower_http::services::ServeDir;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the database pool and OAuth
///   configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Route Details
///
/// All JSON endpoints live under `/api` and are wired up by
/// [`configure_api_routes`]. Static files are served from the `public`
/// directory under `/static`, and anything else falls through to a plain
/// 404 handler.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    // Add API routes
    let router = configure_api_routes(router);

    // Add static file serving
    let router = router.nest_service("/static", ServeDir::new("public"));

    // Fallback handler for 404
    let router = router.fallback(|| async { "404 Not Found" });

    // Use AppState as router state
    router.with_state(app_state)
}
