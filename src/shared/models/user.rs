//! User Data Structures
//!
//! Public user representation, roles, and the session payload returned by
//! the OAuth callback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular community member
    User,
    /// Can review and approve submissions
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "USER" => Some(Role::User),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

/// Public view of a user, safe to return from any endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPublic {
    /// Unique user ID
    pub id: Uuid,
    /// Account email (from the identity provider)
    pub email: String,
    /// Display name, if the provider supplied one
    pub name: Option<String>,
    /// Unique handle, auto-generated from the email on first sign-in
    pub username: Option<String>,
    /// Avatar URL
    pub image: Option<String>,
    /// Account role
    #[serde(default)]
    pub role: Role,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl UserPublic {
    /// Best display string for UI: name, else username, else the email
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name.as_deref() {
            if !name.is_empty() {
                return name;
            }
        }
        if let Some(username) = self.username.as_deref() {
            if !username.is_empty() {
                return username;
            }
        }
        &self.email
    }
}

/// Returned by the OAuth callback so native clients can capture the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Opaque session token, also set as the `hunt_session` cookie
    pub token: String,
    /// The signed-in user
    pub user: UserPublic,
}

/// Simple activity counters for the profile view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct UserStats {
    pub votes_cast: i64,
    pub submissions_made: i64,
}
