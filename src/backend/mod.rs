//! Backend Module
//!
//! This module contains all server-side code for the DappHunt application:
//! an Axum HTTP server exposing the directory, voting, leaderboard, forum
//! and submission APIs over PostgreSQL.
//!
//! # Overview
//!
//! The backend module includes:
//! - Axum HTTP server setup and configuration
//! - OAuth 2.0 sign-in against a third-party identity provider
//! - Database-backed sessions and role checks
//! - Domain endpoints (projects, votes, leaderboard, submissions, forum,
//!   categories), each split into HTTP handlers and database operations
//! - Database seeding for local development
//!
//! This module is only compiled when the `ssr` feature is enabled.
//! All code in this module runs on the server and handles HTTP requests.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── error/          - Error types
//! ├── auth/           - OAuth sign-in, users, sessions
//! ├── middleware/     - Session extraction
//! ├── projects/       - Directory listing and creation
//! ├── votes/          - Vote toggle and score recalculation
//! ├── leaderboard/    - Period-ranked listing
//! ├── submissions/    - Submission intake and review
//! ├── forum/          - Threads and posts
//! ├── categories/     - Category listing
//! └── seed/           - Development data seeding
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) that contains:
//! - An optional PostgreSQL connection pool (handlers answer 503 when the
//!   database is not configured)
//! - The OAuth provider configuration
//!
//! # Error Handling
//!
//! The backend uses standard HTTP status codes and custom error types:
//! - `ApiError` for errors that carry a JSON body
//! - `StatusCode` for bare rejections (extractors, middleware)
//! - Proper error propagation with `?` operator

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Authentication and user management
#[cfg(feature = "ssr")]
pub mod auth;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Project directory endpoints
#[cfg(feature = "ssr")]
pub mod projects;

/// Voting endpoints
#[cfg(feature = "ssr")]
pub mod votes;

/// Period-ranked leaderboard endpoints
#[cfg(feature = "ssr")]
pub mod leaderboard;

/// Submission intake and review endpoints
#[cfg(feature = "ssr")]
pub mod submissions;

/// Forum thread and post endpoints
#[cfg(feature = "ssr")]
pub mod forum;

/// Category listing endpoints
#[cfg(feature = "ssr")]
pub mod categories;

/// Development data seeding
#[cfg(feature = "ssr")]
pub mod seed;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use error::ApiError;
#[cfg(feature = "ssr")]
pub use server::init::create_app;
#[cfg(feature = "ssr")]
pub use server::state::AppState;
