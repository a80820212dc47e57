//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server backing the DappHunt API.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading (database)
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! The server uses `AppState` as the central state container, which holds:
//! - An optional PostgreSQL connection pool
//! - The OAuth provider configuration used for sign-in
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: Loads the database pool and OAuth settings
//! 2. **State Creation**: Builds the shared `AppState`
//! 3. **Background Tasks**: Starts the expired-session sweeper
//! 4. **Router Creation**: Configures all routes and middleware

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::create_app;
