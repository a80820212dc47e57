//! Home view: today's ranking, the category strip, and a forum sidebar.

use eframe::egui;
use uuid::Uuid;

use crate::egui_app::components::{project_card, thread_row};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;
use crate::shared::models::VoteKind;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // First visit kicks off the fetch; errors stay on screen until Retry.
    if state.home.is_none() && state.home_result.is_none() && state.home_error.is_none() {
        state.load_home();
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Discover the best Solana dapps")
                    .size(26.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Upvote your favorites and see what the community is hunting today.",
            );
            ui.add_space(12.0);

            if let Some(notice) = state.vote_notice.clone() {
                ui.horizontal(|ui| {
                    styles::banner_frame(true).show(ui, |ui| {
                        ui.colored_label(colors::TEXT_PRIMARY, notice);
                    });
                    if ui.small_button("✖").clicked() {
                        state.vote_notice = None;
                    }
                });
                ui.add_space(8.0);
            }

            if let Some(error) = state.home_error.clone() {
                styles::banner_frame(false).show(ui, |ui| {
                    ui.colored_label(colors::ERROR, error);
                });
                if ui.button("Retry").clicked() {
                    state.load_home();
                }
                return;
            }

            if state.home.is_none() {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
                });
                return;
            }

            render_categories(ui, state);
            ui.add_space(12.0);

            let mut vote_action: Option<(Uuid, VoteKind)> = None;
            let mut open_thread: Option<Uuid> = None;

            ui.horizontal_top(|ui| {
                let sidebar_width = 300.0;
                let main_width = (ui.available_width() - sidebar_width - 16.0).max(320.0);

                ui.vertical(|ui| {
                    ui.set_width(main_width);
                    ui.label(
                        egui::RichText::new("Today's top dapps")
                            .size(17.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                    ui.add_space(6.0);

                    if let Some(home) = &state.home {
                        if home.leaderboard.leaderboard.is_empty() {
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                "No votes yet today. Be the first to hunt something!",
                            );
                        }
                        for entry in &home.leaderboard.leaderboard {
                            if let Some(kind) = project_card::render(ui, entry) {
                                vote_action = Some((entry.project.id, kind));
                            }
                            ui.add_space(6.0);
                        }
                    }
                });

                ui.add_space(16.0);

                ui.vertical(|ui| {
                    ui.set_width(sidebar_width);
                    styles::sidebar_frame().show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("💬 From the forum")
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.add_space(6.0);

                        if let Some(home) = &state.home {
                            for thread in &home.threads.threads {
                                if thread_row::render(ui, thread) {
                                    open_thread = Some(thread.id);
                                }
                                ui.add_space(4.0);
                            }
                        }

                        if ui.button("Browse all discussions").clicked() {
                            state.current_view = AppView::Forum;
                        }
                    });
                });
            });

            if let Some((project_id, kind)) = vote_action {
                state.handle_vote(project_id, kind);
            }
            if let Some(id) = open_thread {
                state.current_view = AppView::Forum;
                state.load_thread(id);
            }
        });
}

/// Category strip with live-project counts
fn render_categories(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(home) = &state.home else { return };

    ui.horizontal_wrapped(|ui| {
        for category in &home.categories.categories {
            egui::Frame::new()
                .fill(styles::category_color(category.color.as_deref()))
                .corner_radius(egui::CornerRadius::same(12))
                .inner_margin(egui::Margin::symmetric(10, 4))
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} ({})",
                            category.name, category.project_count
                        ))
                        .size(12.0)
                        .color(colors::TEXT_LIGHT),
                    );
                });
        }
    });
}
