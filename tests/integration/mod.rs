//! Integration tests
//!
//! End-to-end tests against the API router and the database layer.

pub mod api;
pub mod database;
