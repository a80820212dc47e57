//! Authentication Module
//!
//! This module handles OAuth sign-in, user accounts, and session management.
//! Sign-in is delegated to an external identity provider (Google); this
//! server never sees or stores passwords.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`oauth`** - Provider client (authorize URL, code exchange, userinfo)
//! - **`users`** - User rows, account links, find-or-create flow
//! - **`sessions`** - Database-backed session rows and their lifecycle
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── oauth.rs        - OAuth provider client
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - Session rows and lifecycle
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── signin.rs   - OAuth redirect handler
//!     ├── callback.rs - Code exchange and session creation
//!     ├── me.rs       - Current user and activity stats
//!     └── signout.rs  - Session destruction
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signin**: GET /api/auth/signin redirects to the provider
//! 2. **Callback**: the provider redirects back with a code; the server
//!    exchanges it, fetches the profile, finds or creates the user, and
//!    inserts a session row
//! 3. **Session use**: the opaque token travels as the `hunt_session`
//!    cookie or an `Authorization: Bearer` header
//!
//! # Security
//!
//! - Session tokens are random UUIDs with no embedded claims
//! - Sessions expire after 30 days; expired rows are deleted on first use
//!   and swept hourly
//! - Admin-only endpoints check the user's role server-side

/// OAuth provider client
pub mod oauth;

/// User data model and database operations
pub mod users;

/// Session rows and lifecycle
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_me, get_my_stats, oauth_callback, signin, signout};
pub use oauth::OauthConfig;
