//! Forum Module
//!
//! Discussion threads and replies. Listing and reading are public; replying
//! needs a session, and opening a thread falls back to the demo user so the
//! forum works before sign-in is wired up in a client.

pub mod db;
pub mod handlers;

pub use handlers::*;
