//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! └── api_routes.rs   - API endpoint wiring
//! ```
//!
//! # Route Organization
//!
//! Routes are added in a specific order to ensure proper matching:
//!
//! 1. **API Routes** - Auth, projects, votes, leaderboard, submissions,
//!    forum, categories
//! 2. **Static Files** - Assets served from the public directory
//! 3. **Fallback Handler** - 404 errors
//!
//! # Route Types
//!
//! ## Auth Routes
//!
//! - `GET /api/auth/signin` - Redirect to the OAuth provider
//! - `GET /api/auth/callback` - OAuth code exchange and session creation
//! - `GET /api/auth/me` - Get current user
//! - `GET /api/auth/me/stats` - Vote/submission counts for current user
//! - `POST /api/auth/signout` - Destroy the current session
//!
//! ## Content Routes
//!
//! - `GET/POST /api/projects` - Browse and create projects
//! - `GET /api/projects/{id}` - Project detail (the segment is the slug)
//! - `GET/POST /api/projects/{id}/vote` - Vote stats and vote casting
//! - `GET /api/leaderboard` - Ranked projects for a time period
//! - `GET/POST /api/submissions` - Review queue and new submissions
//! - `POST /api/submissions/{id}/approve` - Approve (admin)
//! - `POST /api/submissions/{id}/reject` - Reject (admin)
//! - `GET/POST /api/forum/threads` - Thread list and creation
//! - `GET /api/forum/threads/{id}` - Thread detail with posts
//! - `POST /api/forum/threads/{id}/posts` - Reply to a thread
//! - `GET /api/categories` - Category list with project counts

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
