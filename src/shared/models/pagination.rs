//! Pagination Envelope
//!
//! Shared by every list endpoint that supports `limit`/`offset`.

use serde::{Deserialize, Serialize};

/// Pagination metadata returned alongside list results
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Total number of rows matching the filter
    pub total: i64,
    /// Page size used for this response
    pub limit: i64,
    /// Offset used for this response
    pub offset: i64,
    /// Whether another page exists past this one
    pub has_more: bool,
}

impl Pagination {
    /// Build the envelope from a total count and the requested window
    pub fn new(total: i64, limit: i64, offset: i64) -> Self {
        Self {
            total,
            limit,
            offset,
            has_more: offset + limit < total,
        }
    }
}
