//! Reusable widgets shared by several views.

pub mod project_card;
pub mod thread_row;
