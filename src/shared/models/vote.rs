//! Vote Data Structures
//!
//! One row per (project, user); casting the same vote again removes it,
//! casting the opposite vote switches it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a vote
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

impl VoteKind {
    /// Wire spelling used by the API ("up" / "down")
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteKind::Up => "up",
            VoteKind::Down => "down",
        }
    }

    /// Column value stored in the votes table ("UP" / "DOWN")
    pub fn db_value(&self) -> &'static str {
        match self {
            VoteKind::Up => "UP",
            VoteKind::Down => "DOWN",
        }
    }

    /// Parse either spelling, case-insensitively
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(VoteKind::Up),
            "down" => Some(VoteKind::Down),
            _ => None,
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            VoteKind::Up => VoteKind::Down,
            VoteKind::Down => VoteKind::Up,
        }
    }
}

/// Request body for casting a vote
///
/// Both fields are optional at the serde level so the handler can reply
/// with the API's 400 messages instead of a decode error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VoteRequest {
    pub user_id: Option<Uuid>,
    pub vote_type: Option<String>,
}

/// Denormalized counters echoed back after a vote changes them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VotedProject {
    pub id: Uuid,
    pub total_votes: i32,
    pub hunt_score: i32,
}

/// Response after casting, switching or removing a vote
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteResponse {
    /// Human-readable outcome
    pub message: String,
    /// "created", "updated" or "removed"
    pub action: String,
    /// The recorded vote direction; absent when the vote was removed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_type: Option<VoteKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_votes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_votes: Option<i64>,
    /// The project's total_votes after the recount
    pub new_vote_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<VotedProject>,
}

/// Response for `GET /api/projects/{id}/vote`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteStats {
    pub up_votes: i64,
    pub down_votes: i64,
    /// The querying user's current vote, when a user_id was supplied
    pub user_vote: Option<VoteKind>,
}

/// Score derived from vote counts: max(0, (up − down) × 10)
pub fn hunt_score(up_votes: i64, down_votes: i64) -> i32 {
    let raw = (up_votes - down_votes) * 10;
    raw.max(0) as i32
}
