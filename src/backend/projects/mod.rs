//! Project Directory Module
//!
//! Listing, detail lookup and creation for the projects in the directory.

pub mod db;
pub mod handlers;

pub use handlers::*;
