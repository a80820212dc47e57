//! Category Data Structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project category (DeFi, NFTs, Gaming, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// URL-safe identifier
    pub slug: String,
    /// Short description
    pub description: Option<String>,
    /// Accent color as a hex string (e.g. "#10B981")
    pub color: Option<String>,
    /// When the category was created
    pub created_at: DateTime<Utc>,
}

/// Category with its live-project count, as returned by `/api/categories`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub color: Option<String>,
    /// Number of LIVE projects filed under this category
    pub project_count: i64,
}

/// Response for listing categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategorySummary>,
    pub total: usize,
}
