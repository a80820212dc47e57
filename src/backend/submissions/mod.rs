//! Submissions Module
//!
//! Intake and review for project applications: builders file the full
//! form, admins approve (spawning a LIVE project) or reject with notes.

pub mod db;
pub mod handlers;

pub use handlers::*;
