//! API integration tests
//!
//! Integration tests for all API endpoints. Each module covers one route
//! group; database-backed cases skip themselves when no test database is
//! reachable.

#[cfg(feature = "ssr")]
mod auth_test;
#[cfg(feature = "ssr")]
mod categories_test;
#[cfg(feature = "ssr")]
mod forum_test;
#[cfg(feature = "ssr")]
mod leaderboard_test;
#[cfg(feature = "ssr")]
mod projects_test;
#[cfg(feature = "ssr")]
mod submissions_test;
#[cfg(feature = "ssr")]
mod votes_test;
