//! Submission Data Structures
//!
//! A submission is the full application form a builder files to get their
//! dapp listed. Admins review the queue; approval converts the submission
//! into a LIVE project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::models::pagination::Pagination;
use crate::shared::models::project::ProjectStatus;

/// Review status of a submission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    /// Waiting for review
    Pending,
    /// An admin has started looking at it
    UnderReview,
    /// Converted into a project
    Approved,
    /// Declined, with review notes explaining why
    Rejected,
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Pending
    }
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "PENDING",
            SubmissionStatus::UnderReview => "UNDER_REVIEW",
            SubmissionStatus::Approved => "APPROVED",
            SubmissionStatus::Rejected => "REJECTED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(SubmissionStatus::Pending),
            "UNDER_REVIEW" => Some(SubmissionStatus::UnderReview),
            "APPROVED" => Some(SubmissionStatus::Approved),
            "REJECTED" => Some(SubmissionStatus::Rejected),
            _ => None,
        }
    }
}

/// A filed submission
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub id: Uuid,
    pub project_name: String,
    pub one_liner: Option<String>,
    /// Category name as typed by the submitter (resolved on approval)
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub description: String,
    pub key_features: Option<String>,
    pub unique_value: Option<String>,
    pub target_audience: Option<String>,
    pub solana_address: String,
    pub github_repo: Option<String>,
    pub live_url: String,
    pub testnet_url: Option<String>,
    pub audit_status: Option<String>,
    pub token_symbol: Option<String>,
    pub token_address: Option<String>,
    pub tvl: Option<String>,
    pub revenue_model: Option<String>,
    pub token_distribution: Option<String>,
    pub founders: Option<String>,
    pub team_size: Option<String>,
    pub twitter: Option<String>,
    pub discord: Option<String>,
    pub telegram: Option<String>,
    pub blog: Option<String>,
    pub launch_date: DateTime<Utc>,
    pub current_stage: Option<String>,
    pub funding_status: Option<String>,
    pub achievements: Option<String>,
    #[serde(default)]
    pub status: SubmissionStatus,
    pub review_notes: Option<String>,
    /// User who filed the submission
    pub submitted_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for filing a submission
///
/// Required fields deserialize to empty strings when absent so validation
/// can answer with a 400 naming the field.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NewSubmission {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub live_url: String,
    #[serde(default)]
    pub solana_address: String,
    pub one_liner: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub key_features: Option<String>,
    pub unique_value: Option<String>,
    pub target_audience: Option<String>,
    pub github_repo: Option<String>,
    pub testnet_url: Option<String>,
    pub audit_status: Option<String>,
    pub token_symbol: Option<String>,
    pub token_address: Option<String>,
    pub tvl: Option<String>,
    pub revenue_model: Option<String>,
    pub token_distribution: Option<String>,
    pub founders: Option<String>,
    pub team_size: Option<String>,
    pub twitter: Option<String>,
    pub discord: Option<String>,
    pub telegram: Option<String>,
    pub blog: Option<String>,
    /// Defaults to now when omitted
    pub launch_date: Option<DateTime<Utc>>,
    pub current_stage: Option<String>,
    pub funding_status: Option<String>,
    pub achievements: Option<String>,
}

impl NewSubmission {
    /// Check the required fields, reporting the first one missing
    pub fn validate(&self) -> Result<(), SharedError> {
        for (field, value) in [
            ("project_name", &self.project_name),
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

/// Response for listing submissions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionListResponse {
    pub submissions: Vec<Submission>,
    pub pagination: Pagination,
}

/// Acknowledgement slice of a freshly filed submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub project_name: String,
    pub status: SubmissionStatus,
    pub created_at: DateTime<Utc>,
}

/// Response after filing a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub submission: SubmissionReceipt,
}

/// The project spawned by approving a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovedProject {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub status: ProjectStatus,
}

/// Response after approving a submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApproveResponse {
    pub message: String,
    pub project: ApprovedProject,
}

/// Request body for rejecting a submission
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RejectRequest {
    /// Stored as the submission's review notes
    pub reason: Option<String>,
}
