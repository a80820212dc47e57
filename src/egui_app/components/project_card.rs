//! Project Card Component
//!
//! A single ranked row of the leaderboard: rank, name, pitch, category chip
//! and the vote arrows.

use eframe::egui;

use crate::egui_app::theme::{colors, styles};
use crate::shared::models::{LeaderboardEntry, VoteKind};

/// Render one leaderboard entry as a card
/// Returns the vote direction if one of the arrows was clicked
pub fn render(ui: &mut egui::Ui, entry: &LeaderboardEntry) -> Option<VoteKind> {
    let mut vote = None;

    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            // Rank
            ui.add_sized(
                [36.0, 36.0],
                egui::Label::new(
                    egui::RichText::new(format!("{}.", entry.rank))
                        .size(20.0)
                        .strong()
                        .color(colors::RANK),
                ),
            );

            ui.add_space(4.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&entry.project.name)
                            .size(16.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    if entry.project.featured {
                        ui.colored_label(colors::PENDING, "⭐");
                    }
                });

                if let Some(ref one_liner) = entry.project.one_liner {
                    ui.colored_label(colors::TEXT_SECONDARY, one_liner);
                }

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if let Some(ref category) = entry.project.category {
                        category_chip(ui, &category.name, category.color.as_deref());
                        ui.add_space(6.0);
                    }
                    if let Some(ref tvl) = entry.project.tvl {
                        ui.colored_label(colors::TEXT_SECONDARY, format!("TVL {}", tvl));
                        ui.add_space(6.0);
                    }
                    ui.colored_label(
                        colors::TIMESTAMP,
                        format!("{} votes this period", entry.period_votes),
                    );
                });
            });

            // Vote column on the right
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add_space(4.0);
                ui.vertical(|ui| {
                    let up = egui::Button::new(
                        egui::RichText::new(format!("▲ {}", entry.project.total_votes))
                            .color(colors::UPVOTE_ACTIVE),
                    )
                    .fill(colors::CORAL_TINT);
                    if ui.add(up).on_hover_text("Upvote").clicked() {
                        vote = Some(VoteKind::Up);
                    }

                    let down =
                        egui::Button::new(egui::RichText::new("▼").color(colors::VOTE_IDLE));
                    if ui.add(down).on_hover_text("Downvote").clicked() {
                        vote = Some(VoteKind::Down);
                    }
                });

                ui.add_space(8.0);
                ui.vertical(|ui| {
                    ui.colored_label(
                        colors::TEXT_PRIMARY,
                        egui::RichText::new(format!("{}", entry.period_score)).strong(),
                    );
                    ui.colored_label(colors::TIMESTAMP, "score");
                });
            });
        });
    });

    vote
}

/// Small rounded label in the category's color
pub fn category_chip(ui: &mut egui::Ui, name: &str, color: Option<&str>) {
    egui::Frame::new()
        .fill(styles::category_color(color))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(name)
                    .size(11.0)
                    .color(colors::TEXT_LIGHT),
            );
        });
}
