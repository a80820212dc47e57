//! Voting Module
//!
//! One vote per (project, user). Casting the same direction again removes
//! the vote, casting the opposite direction switches it; every change
//! recounts the project's denormalized counters.

pub mod db;
pub mod handlers;

pub use handlers::*;
