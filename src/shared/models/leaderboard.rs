//! Leaderboard Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::models::project::Project;

/// Leaderboard period granularity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Default for PeriodType {
    fn default() -> Self {
        // The API's default view; without a month it spans the whole year
        PeriodType::Monthly
    }
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Daily => "daily",
            PeriodType::Weekly => "weekly",
            PeriodType::Monthly => "monthly",
            PeriodType::Yearly => "yearly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "daily" => Some(PeriodType::Daily),
            "weekly" => Some(PeriodType::Weekly),
            "monthly" => Some(PeriodType::Monthly),
            "yearly" => Some(PeriodType::Yearly),
            _ => None,
        }
    }
}

/// One ranked row of the leaderboard
///
/// Serializes as the project's fields plus `rank`, `period_votes` and
/// `period_score` at the top level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    #[serde(flatten)]
    pub project: Project,
    /// 1-based position after ordering
    pub rank: i64,
    /// Votes cast on this project inside the period window
    pub period_votes: i64,
    /// period_votes × 10 + hunt_score
    pub period_score: i64,
}

/// The period window a leaderboard response was computed for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodInfo {
    #[serde(rename = "type")]
    pub period_type: PeriodType,
    pub year: i32,
    pub month: Option<u32>,
    pub week: Option<u32>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Response for `GET /api/leaderboard`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub period: PeriodInfo,
    /// "featured" or "all"
    pub filter: String,
    pub total: usize,
}
