//! Theme Styling Functions
//!
//! This module provides helper functions for applying the hunt color scheme
//! consistently across all UI components.

use eframe::egui::{self, Color32, CornerRadius, Stroke};

use super::colors;
use crate::shared::models::SubmissionStatus;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    // Window styling
    style.visuals.window_fill = colors::CARD_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);

    // Panel styling
    style.visuals.panel_fill = colors::BG_LIGHT;

    // Widget styling
    style.visuals.widgets.noninteractive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = colors::CARD_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.hovered.bg_fill = colors::CORAL_TINT;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_PRIMARY);

    style.visuals.widgets.active.bg_fill = colors::CORAL;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Selection color
    style.visuals.selection.bg_fill = colors::CORAL_TINT;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::CORAL);

    ctx.set_style(style);
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .inner_margin(egui::Margin::symmetric(16, 10))
}

/// Create a frame style for content cards (projects, threads, forms)
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
}

/// Create a frame style for the forum sidebar on the home view
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(8))
        .inner_margin(egui::Margin::same(10))
}

/// Create a frame for a success or error banner
pub fn banner_frame(success: bool) -> egui::Frame {
    let (fill, stroke) = if success {
        (colors::SUCCESS_TINT, colors::SUCCESS)
    } else {
        (colors::ERROR_TINT, colors::ERROR)
    };

    egui::Frame::new()
        .fill(fill)
        .stroke(Stroke::new(1.0, stroke))
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Badge color for a submission status
pub fn status_color(status: SubmissionStatus) -> Color32 {
    match status {
        SubmissionStatus::Pending => colors::PENDING,
        SubmissionStatus::UnderReview => colors::UNDER_REVIEW,
        SubmissionStatus::Approved => colors::SUCCESS,
        SubmissionStatus::Rejected => colors::ERROR,
    }
}

/// Parse a `#RRGGBB` string, as stored on categories, into a color
pub fn hex_color(hex: &str) -> Option<Color32> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color32::from_rgb(r, g, b))
}

/// Chip color for a category, falling back when none is stored
pub fn category_color(color: Option<&str>) -> Color32 {
    color
        .and_then(hex_color)
        .unwrap_or(colors::CHIP_FALLBACK)
}
