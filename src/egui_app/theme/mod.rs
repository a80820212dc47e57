//! Theme Module
//!
//! This module provides the color scheme and styling for the DappHunt
//! desktop client. It includes:
//!
//! - Color constants for the coral/pink hunt palette
//! - Styling helper functions for consistent UI appearance
//! - Frame builders for cards, bars, and banners
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! // Apply global theme
//! styles::apply_global_theme(ctx);
//!
//! // Use color constants
//! ui.colored_label(colors::CORAL, "DappHunt");
//!
//! // Use frame builders
//! styles::card_frame().show(ui, |ui| {
//!     // Card content
//! });
//! ```

pub mod colors;
pub mod styles;

pub use colors::*;
pub use styles::*;
