//! egui Native Desktop App Module
//!
//! This module provides a native desktop client using egui/eframe that
//! talks to the Axum backend over its REST API.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL, token storage)
//! - **`auth`** - Client-side auth state and session calls
//! - **`api`** - Blocking REST client shared by all views
//! - **`types`** - The view enum the central panel switches on
//! - **`state`** - Central app state plus the worker-result channels
//! - **`views`** - One render function per screen
//! - **`components`** - Widgets shared by several views
//! - **`theme`** - Coral/pink palette and frame builders
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Main application entry point
//! ├── config.rs       - Configuration management
//! ├── auth.rs         - Auth state and session calls
//! ├── api.rs          - Blocking REST client
//! ├── types.rs        - View enum
//! ├── state/          - Central app state
//! ├── views/          - Screens
//! ├── components/     - Shared widgets
//! └── theme/          - Colors and styles
//! ```
//!
//! # Threading
//!
//! The UI never blocks: every request runs on a spawned worker thread and
//! reports back over an mpsc channel drained once per frame.

pub mod config;
pub mod auth;
pub mod api;
pub mod types;
pub mod state;
pub mod views;
pub mod components;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use auth::AuthState;
pub use types::AppView;
pub use state::AppState;
