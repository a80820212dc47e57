//! Profile view: account details and activity counters.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(user) = state.auth_state.user.clone() else {
        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            styles::card_frame().show(ui, |ui| {
                ui.colored_label(colors::TEXT_PRIMARY, "You are not signed in.");
                if ui.button("Sign in").clicked() {
                    state.current_view = AppView::Auth;
                }
            });
        });
        return;
    };

    if state.my_stats.is_none() && state.stats_result.is_none() {
        state.load_stats();
    }

    ui.add_space(8.0);
    ui.label(
        egui::RichText::new("Profile")
            .size(24.0)
            .strong()
            .color(colors::TEXT_PRIMARY),
    );
    ui.add_space(12.0);

    styles::card_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            // Avatar placeholder (first letter of the display name)
            let initial = user
                .display_name()
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());

            egui::Frame::new()
                .fill(colors::PINK)
                .corner_radius(egui::CornerRadius::same(24))
                .inner_margin(egui::Margin::same(14))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(initial)
                            .size(20.0)
                            .strong()
                            .color(colors::TEXT_LIGHT),
                    );
                });

            ui.add_space(10.0);

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(user.display_name())
                            .size(18.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    if user.role.is_admin() {
                        egui::Frame::new()
                            .fill(colors::CORAL)
                            .corner_radius(egui::CornerRadius::same(8))
                            .inner_margin(egui::Margin::symmetric(8, 2))
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new("ADMIN")
                                        .size(11.0)
                                        .color(colors::TEXT_LIGHT),
                                );
                            });
                    }
                });

                if let Some(ref username) = user.username {
                    ui.colored_label(colors::TEXT_SECONDARY, format!("@{}", username));
                }
                ui.colored_label(colors::TEXT_SECONDARY, &user.email);
                ui.colored_label(
                    colors::TIMESTAMP,
                    format!("Member since {}", user.created_at.format("%b %Y")),
                );
            });
        });
    });

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        let stats = state.my_stats.unwrap_or_default();
        stat_tile(ui, stats.votes_cast, "votes cast");
        ui.add_space(8.0);
        stat_tile(ui, stats.submissions_made, "submissions");
        if state.stats_result.is_some() {
            ui.spinner();
        }
    });
}

fn stat_tile(ui: &mut egui::Ui, value: i64, label: &str) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(120.0);
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(format!("{}", value))
                    .size(28.0)
                    .strong()
                    .color(colors::CORAL),
            );
            ui.colored_label(colors::TEXT_SECONDARY, label);
        });
    });
}
