//! Categories Module
//!
//! The fixed-ish taxonomy projects are filed under. Categories are seeded
//! and grow only when an approved submission names one that does not exist
//! yet.

pub mod db;
pub mod handlers;

pub use handlers::*;
