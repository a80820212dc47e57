// Increase recursion limit for complex async operations
#![recursion_limit = "256"]

//! DappHunt - Main Library
//!
//! DappHunt is a directory and voting platform for Solana decentralized
//! applications: a ranked leaderboard of launched projects, community voting,
//! a discussion forum, and a submission pipeline with admin review.
//!
//! # Overview
//!
//! This library provides the core functionality for DappHunt, including:
//! - REST API backed by PostgreSQL (projects, votes, leaderboard, forum,
//!   submissions, categories)
//! - Session-based authentication via Google OAuth 2.0
//! - Native desktop client via egui
//! - Database seeding for local development
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the client and the backend
//!   - Project, vote, leaderboard, submission, forum and category models
//!   - Status enums and pagination envelopes
//!   - Configuration and error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and route table
//!   - OAuth sign-in, database-backed sessions, role checks
//!   - Domain modules with handler/query splits
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Leaderboard, submit, admin, forum and profile views
//!   - Blocking REST client run on worker threads
//!   - Local session persistence
//!
//! # Feature Flags
//!
//! - **`ssr`** - Enables the backend modules (Axum server, sqlx/Postgres,
//!   OAuth handlers). Required for `dapphunt-server` and `dapphunt-seed`
//!   builds; the desktop client builds without it.
//!
//! # Usage
//!
//! ## Server-Side
//!
//! Requires the `ssr` feature:
//!
//! ```rust,ignore
//! use dapphunt::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with Axum server
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```text
//! cargo run --bin egui_app
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
