/**
 * Authentication Module
 *
 * Client-side auth state plus the HTTP calls behind the sign-in flow. The
 * backend signs users in through Google in the browser; the native client
 * takes the session token from the callback's JSON body, pasted in by the
 * user, and validates it against /api/auth/me.
 */

use crate::egui_app::api::{get_json, post_json};
use crate::egui_app::config::Config;
use crate::shared::models::{UserPublic, UserStats};

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: Option<UserPublic>,
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
    }

    /// True when the signed-in user has the ADMIN role
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|user| user.role.is_admin())
    }
}

/// Validate a session token by fetching the user behind it
pub fn fetch_me(config: &Config, token: &str) -> Result<UserPublic, String> {
    get_json(config, "/api/auth/me", Some(token))
}

/// The signed-in user's activity counters
pub fn fetch_my_stats(config: &Config, token: &str) -> Result<UserStats, String> {
    get_json(config, "/api/auth/me/stats", Some(token))
}

/// Destroy the session server-side
pub fn signout(config: &Config, token: &str) -> Result<(), String> {
    let _: serde_json::Value = post_json(
        config,
        "/api/auth/signout",
        Some(token),
        &serde_json::json!({}),
    )?;
    Ok(())
}
