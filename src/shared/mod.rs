//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the desktop client and the backend. These types are used for
//! serialization and communication over the REST API.
//!
//! # Overview
//!
//! The shared module provides platform-agnostic types that can be used
//! in both server and client code. All types are designed for serialization
//! and transmission over HTTP.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// API data models (projects, votes, submissions, forum, ...)
pub mod models;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
pub use models::{
    Category, ForumThread, LeaderboardEntry, Pagination, Project, Submission, SubmissionStatus,
    UserPublic, VoteKind,
};
