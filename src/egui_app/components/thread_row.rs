//! Thread Row Component
//!
//! One thread in the forum listing: pin/hot markers, title, author and
//! reply count.

use chrono::{DateTime, Utc};
use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::models::ThreadSummary;

/// Render a single thread row
/// Returns true if the row was clicked
pub fn render(ui: &mut egui::Ui, thread: &ThreadSummary) -> bool {
    let response = styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            if thread.is_pinned {
                ui.label("📌");
            }
            if thread.is_hot {
                ui.colored_label(colors::HOT, "🔥");
            }
            ui.label(
                egui::RichText::new(&thread.title)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(colors::TIMESTAMP, format_activity(&thread.last_activity));
            });
        });

        ui.horizontal(|ui| {
            ui.colored_label(colors::TEXT_SECONDARY, &thread.author);
            ui.colored_label(colors::SEPARATOR, "·");
            ui.colored_label(colors::TEXT_SECONDARY, &thread.category);
            ui.colored_label(colors::SEPARATOR, "·");
            let label = if thread.replies == 1 {
                "1 reply".to_string()
            } else {
                format!("{} replies", thread.replies)
            };
            ui.colored_label(colors::TEXT_SECONDARY, label);
        });
    });

    response.response.interact(egui::Sense::click()).clicked()
}

/// "Jun 15, 14:02" style timestamp for the listing
fn format_activity(when: &DateTime<Utc>) -> String {
    when.format("%b %d, %H:%M").to_string()
}
