//! Middleware Module
//!
//! This module contains request-processing helpers shared across handlers:
//! session token extraction and the `CurrentUser` extractor used by
//! endpoints that require a signed-in user.

pub mod auth;

pub use auth::{optional_session_user, session_token_from_headers, CurrentUser};
