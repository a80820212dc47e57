//! Leaderboard Module
//!
//! Period-ranked project listing: a pure date-range computation in
//! `period`, the ranked query in `db`, and the HTTP surface in `handlers`.

pub mod db;
pub mod handlers;
pub mod period;

pub use handlers::*;
