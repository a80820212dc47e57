//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Database test fixtures
//! - Mock identity-provider helpers
//! - Authentication test helpers
//! - Custom assertion macros

pub mod auth_helpers;
pub mod database;
pub mod mock_server;

// Re-export commonly used utilities
#[allow(unused_imports)]
pub use auth_helpers::*;
#[allow(unused_imports)]
pub use database::*;
#[allow(unused_imports)]
pub use mock_server::*;
