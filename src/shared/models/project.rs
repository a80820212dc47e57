//! Project Data Structures
//!
//! A project is a launched Solana dapp listed in the directory. Projects
//! carry denormalized vote counters (`total_votes`, `hunt_score`) that the
//! voting endpoint keeps in sync with the votes table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::models::pagination::Pagination;

/// Lifecycle status of a project listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    /// Created but not yet visible in the directory
    Draft,
    /// Visible and votable
    Live,
    /// Retired from the directory
    Archived,
}

impl Default for ProjectStatus {
    fn default() -> Self {
        ProjectStatus::Live
    }
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "DRAFT",
            ProjectStatus::Live => "LIVE",
            ProjectStatus::Archived => "ARCHIVED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DRAFT" => Some(ProjectStatus::Draft),
            "LIVE" => Some(ProjectStatus::Live),
            "ARCHIVED" => Some(ProjectStatus::Archived),
            _ => None,
        }
    }
}

/// Embedded category reference on a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRef {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub color: Option<String>,
}

/// Embedded owner reference on a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerRef {
    pub id: Uuid,
    pub name: Option<String>,
    pub username: Option<String>,
}

/// A listed project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    /// Unique project ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// URL-safe identifier derived from the name
    pub slug: String,
    /// One-sentence pitch
    pub one_liner: Option<String>,
    /// Full description
    pub description: String,
    /// Logo image URL
    pub logo_url: Option<String>,
    /// Production URL of the dapp
    pub live_url: String,
    pub github_url: Option<String>,
    pub twitter_handle: Option<String>,
    pub discord_url: Option<String>,
    pub telegram_url: Option<String>,
    pub blog_url: Option<String>,
    /// On-chain program or treasury address
    pub solana_address: String,
    pub token_symbol: Option<String>,
    pub token_address: Option<String>,
    /// Total value locked, freeform (e.g. "$1.2M")
    pub tvl: Option<String>,
    /// When the project launched; drives leaderboard period membership
    pub launch_date: DateTime<Utc>,
    /// Listing status
    #[serde(default)]
    pub status: ProjectStatus,
    /// Editorially featured
    pub featured: bool,
    /// Ranking score: max(0, (up votes − down votes) × 10)
    pub hunt_score: i32,
    /// Upvote count (downvotes do not count toward this)
    pub total_votes: i32,
    /// Category, if filed under one
    pub category: Option<CategoryRef>,
    /// Submitting user, if known
    pub owner: Option<OwnerRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a project directly
///
/// Required fields deserialize to empty strings when absent so validation
/// can answer with a 400 naming the field instead of a bare decode error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewProject {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub solana_address: String,
    pub one_liner: Option<String>,
    pub logo_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_handle: Option<String>,
    pub discord_url: Option<String>,
    pub telegram_url: Option<String>,
    pub blog_url: Option<String>,
    pub token_symbol: Option<String>,
    pub token_address: Option<String>,
    pub tvl: Option<String>,
    pub category_id: Option<Uuid>,
    /// Defaults to now when omitted
    pub launch_date: Option<DateTime<Utc>>,
}

impl NewProject {
    /// Check the required fields, reporting the first one missing
    pub fn validate(&self) -> Result<(), SharedError> {
        for (field, value) in [
            ("name", &self.name),
            ("description", &self.description),
            ("live_url", &self.live_url),
            ("solana_address", &self.solana_address),
        ] {
            if value.trim().is_empty() {
                return Err(SharedError::validation(field, "This field is required"));
            }
        }
        Ok(())
    }
}

/// Response for the project directory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub pagination: Pagination,
}

/// Turn a display name into a URL-safe slug
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single `-`, and trims leading/trailing dashes. "Jupiter Exchange!" and
/// "jupiter---exchange" both map to "jupiter-exchange".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}
