//! Database-level tests
