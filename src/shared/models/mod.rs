//! API Data Models
//!
//! Serde types for everything that crosses the wire between the desktop
//! client and the backend: projects, votes, leaderboard entries,
//! submissions, forum threads and categories, plus the pagination envelope
//! shared by the list endpoints.

/// Users, roles and session payloads
pub mod user;

/// Project categories
pub mod category;

/// Projects and the directory listing
pub mod project;

/// Votes and vote statistics
pub mod vote;

/// Period-ranked leaderboard
pub mod leaderboard;

/// Project submissions and review
pub mod submission;

/// Forum threads and posts
pub mod forum;

/// Pagination envelope for list endpoints
pub mod pagination;

pub use category::{Category, CategoryListResponse, CategorySummary};
pub use forum::{
    ForumPost, ForumThread, NewPost, NewThread, PostView, ThreadDetail, ThreadListResponse,
    ThreadSummary,
};
pub use leaderboard::{LeaderboardEntry, LeaderboardResponse, PeriodInfo, PeriodType};
pub use pagination::Pagination;
pub use project::{
    CategoryRef, NewProject, OwnerRef, Project, ProjectListResponse, ProjectStatus,
};
pub use submission::{
    ApproveResponse, ApprovedProject, NewSubmission, RejectRequest, Submission,
    SubmissionListResponse, SubmissionReceipt, SubmissionStatus, SubmitResponse,
};
pub use user::{Role, SessionResponse, UserPublic, UserStats};
pub use vote::{VoteKind, VoteRequest, VoteResponse, VoteStats, VotedProject};
