/**
 * API Route Wiring
 *
 * This module maps API paths onto their handlers, grouped by domain:
 * - Authentication (OAuth sign-in, session introspection, sign-out)
 * - Projects (browse, detail, create)
 * - Votes (cast, stats)
 * - Leaderboard (period rankings)
 * - Submissions (submit, review queue, approve/reject)
 * - Forum (threads, posts)
 * - Categories
 */

use axum::Router;

use crate::backend::auth::{get_me, get_my_stats, oauth_callback, signin, signout};
use crate::backend::categories::get_categories;
use crate::backend::forum::{create_post, create_thread, get_thread, get_threads};
use crate::backend::leaderboard::get_leaderboard;
use crate::backend::projects::{create_project, get_project_by_slug, get_projects};
use crate::backend::server::state::AppState;
use crate::backend::submissions::{
    approve_submission, create_submission, get_submissions, reject_submission,
};
use crate::backend::votes::{get_vote_stats, vote_on_project};

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// Routes that require a session check it inside the handler (or via the
/// `CurrentUser` extractor) rather than through route-level middleware:
/// - `/api/auth/me`, `/api/auth/me/stats`, `/api/auth/signout`
/// - `POST /api/projects/{id}/vote` (the body `user_id` must match the
///   session user)
/// - `GET /api/submissions` and `POST /api/submissions`
/// - the submission approve/reject endpoints (admin)
///
/// Everything else is public. Thread creation falls back to the demo user
/// when no session is presented.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route(
            "/api/auth/signin",
            axum::routing::get(signin),
        )
        .route(
            "/api/auth/callback",
            axum::routing::get(oauth_callback),
        )
        .route(
            "/api/auth/me",
            axum::routing::get(get_me),
        )
        .route(
            "/api/auth/me/stats",
            axum::routing::get(get_my_stats),
        )
        .route(
            "/api/auth/signout",
            axum::routing::post(signout),
        )
        // Project endpoints. The router requires one param name for the
        // whole `/api/projects/{id}...` subtree; on the detail route the
        // segment carries the project slug.
        .route(
            "/api/projects",
            axum::routing::get(get_projects).post(create_project),
        )
        .route(
            "/api/projects/{id}",
            axum::routing::get(get_project_by_slug),
        )
        // Vote endpoints
        .route(
            "/api/projects/{id}/vote",
            axum::routing::get(get_vote_stats).post(vote_on_project),
        )
        // Leaderboard endpoint
        .route(
            "/api/leaderboard",
            axum::routing::get(get_leaderboard),
        )
        // Submission endpoints
        .route(
            "/api/submissions",
            axum::routing::get(get_submissions).post(create_submission),
        )
        .route(
            "/api/submissions/{id}/approve",
            axum::routing::post(approve_submission),
        )
        .route(
            "/api/submissions/{id}/reject",
            axum::routing::post(reject_submission),
        )
        // Forum endpoints
        .route(
            "/api/forum/threads",
            axum::routing::get(get_threads).post(create_thread),
        )
        .route(
            "/api/forum/threads/{id}",
            axum::routing::get(get_thread),
        )
        .route(
            "/api/forum/threads/{id}/posts",
            axum::routing::post(create_post),
        )
        // Category endpoint
        .route(
            "/api/categories",
            axum::routing::get(get_categories),
        )
}
