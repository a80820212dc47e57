//! Color Constants for the DappHunt Theme
//!
//! This module defines all the color constants used throughout the client.
//! The palette follows the hunt branding: coral and pink accents over light
//! gray backgrounds.

use eframe::egui::Color32;

/// Primary brand accent - Coral
pub const CORAL: Color32 = Color32::from_rgb(0xFF, 0x61, 0x54);

/// Coral, darkened for hover states
pub const CORAL_HOVER: Color32 = Color32::from_rgb(0xE5, 0x4D, 0x41);

/// Secondary brand accent - Pink
pub const PINK: Color32 = Color32::from_rgb(0xEC, 0x72, 0x9C);

/// Soft coral tint for selected chips and rows
pub const CORAL_TINT: Color32 = Color32::from_rgb(0xFF, 0xF0, 0xEE);

/// Main window background - Light gray
pub const BG_LIGHT: Color32 = Color32::from_rgb(0xF7, 0xF8, 0xF9);

/// Top bar background - White
pub const TOP_BAR_BG: Color32 = Color32::WHITE;

/// Card background - White
pub const CARD_BG: Color32 = Color32::WHITE;

/// Card and panel border
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xE8, 0xE8, 0xE8);

/// Primary text - Dark slate
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(0x21, 0x29, 0x3C);

/// Secondary text (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x6F, 0x77, 0x80);

/// Text on coral/pink fills
pub const TEXT_LIGHT: Color32 = Color32::WHITE;

/// Upvote arrow when the user's vote is up
pub const UPVOTE_ACTIVE: Color32 = CORAL;

/// Vote arrows at rest
pub const VOTE_IDLE: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Success banners and APPROVED badges - Green
pub const SUCCESS: Color32 = Color32::from_rgb(0x10, 0xB9, 0x81);

/// Pale green fill behind success banners
pub const SUCCESS_TINT: Color32 = Color32::from_rgb(0xEC, 0xFD, 0xF5);

/// Error banners and REJECTED badges - Red
pub const ERROR: Color32 = Color32::from_rgb(0xEF, 0x44, 0x44);

/// Pale red fill behind error banners
pub const ERROR_TINT: Color32 = Color32::from_rgb(0xFE, 0xF2, 0xF2);

/// PENDING badges - Amber
pub const PENDING: Color32 = Color32::from_rgb(0xF5, 0x9E, 0x0B);

/// UNDER_REVIEW badges - Blue
pub const UNDER_REVIEW: Color32 = Color32::from_rgb(0x3B, 0x82, 0xF6);

/// Hot thread flame accent - Orange
pub const HOT: Color32 = Color32::from_rgb(0xF9, 0x73, 0x16);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0xE5, 0xE7, 0xEB);

/// Timestamp and metadata text
pub const TIMESTAMP: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

/// Rank number in leaderboard rows
pub const RANK: Color32 = CORAL;

/// Fallback chip color when a category has none stored
pub const CHIP_FALLBACK: Color32 = Color32::from_rgb(0x6B, 0x72, 0x80);
