//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── signin.rs   - OAuth redirect handler
//! ├── callback.rs - OAuth callback and session creation
//! ├── me.rs       - Current user and activity stats
//! └── signout.rs  - Session destruction
//! ```
//!
//! # Handlers
//!
//! - **`signin`** - GET /api/auth/signin - Redirect to the OAuth provider
//! - **`oauth_callback`** - GET /api/auth/callback - Code exchange, session
//!   creation
//! - **`get_me`** - GET /api/auth/me - Current user info
//! - **`get_my_stats`** - GET /api/auth/me/stats - Vote/submission counts
//! - **`signout`** - POST /api/auth/signout - Destroy the session
//!
//! # Authentication Flow
//!
//! 1. **Signin**: Browser is redirected to the provider's consent page
//! 2. **Callback**: Provider redirects back with a code → code is exchanged
//!    for tokens → profile fetched → user found or created → session row
//!    inserted → token returned as cookie and JSON
//! 3. **Me**: Session token resolved to the user's public profile
//! 4. **Signout**: Session row deleted, cookie expired

/// OAuth redirect handler
pub mod signin;

/// OAuth callback handler
pub mod callback;

/// Current user handlers
pub mod me;

/// Sign-out handler
pub mod signout;

// Re-export handlers
pub use callback::oauth_callback;
pub use me::{get_me, get_my_stats};
pub use signin::signin;
pub use signout::signout;
