//! Submission form for listing a new dapp.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("🚀 Submit your dapp")
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.colored_label(
                colors::TEXT_SECONDARY,
                "Tell the community what you built. An admin reviews every submission.",
            );
            ui.add_space(12.0);

            if !state.auth_state.authenticated {
                styles::banner_frame(false).show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.colored_label(
                            colors::TEXT_PRIMARY,
                            "You must be signed in to submit a project.",
                        );
                        if ui.button("Sign in").clicked() {
                            state.current_view = AppView::Auth;
                        }
                    });
                });
                ui.add_space(8.0);
            }

            match state.submit_notice.clone() {
                Some(Ok(message)) => {
                    styles::banner_frame(true).show(ui, |ui| {
                        ui.colored_label(colors::SUCCESS, message);
                    });
                    ui.add_space(8.0);
                }
                Some(Err(message)) => {
                    styles::banner_frame(false).show(ui, |ui| {
                        ui.colored_label(colors::ERROR, message);
                    });
                    ui.add_space(8.0);
                }
                None => {}
            }

            styles::card_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new("The basics")
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(6.0);

                egui::Grid::new("submit_required")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        text_row(ui, "Project name *", &mut state.submit_form.name);
                        text_row(ui, "One-liner", &mut state.submit_form.one_liner);
                        text_row(ui, "Category", &mut state.submit_form.category);
                        text_row(ui, "Live URL *", &mut state.submit_form.live_url);
                        text_row(
                            ui,
                            "Solana address *",
                            &mut state.submit_form.solana_address,
                        );
                        text_row(
                            ui,
                            "Launch date (YYYY-MM-DD)",
                            &mut state.submit_form.launch_date,
                        );
                    });

                ui.add_space(6.0);
                ui.colored_label(colors::TEXT_SECONDARY, "Description *");
                ui.add(
                    egui::TextEdit::multiline(&mut state.submit_form.description)
                        .desired_rows(4)
                        .desired_width(f32::INFINITY),
                );
            });

            ui.add_space(8.0);

            styles::card_frame().show(ui, |ui| {
                ui.label(
                    egui::RichText::new("Links and token (optional)")
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.add_space(6.0);

                egui::Grid::new("submit_optional")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        text_row(ui, "GitHub repo", &mut state.submit_form.github_repo);
                        text_row(ui, "Twitter", &mut state.submit_form.twitter);
                        text_row(ui, "Discord", &mut state.submit_form.discord);
                        text_row(ui, "Telegram", &mut state.submit_form.telegram);
                        text_row(ui, "Blog", &mut state.submit_form.blog);
                        text_row(ui, "Token symbol", &mut state.submit_form.token_symbol);
                        text_row(ui, "Token address", &mut state.submit_form.token_address);
                        text_row(ui, "TVL", &mut state.submit_form.tvl);
                        text_row(ui, "Team size", &mut state.submit_form.team_size);
                    });
            });

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let sending = state.submit_result.is_some();
                let button = egui::Button::new(
                    egui::RichText::new("Submit for review").color(colors::TEXT_LIGHT),
                )
                .min_size(egui::vec2(160.0, 32.0))
                .fill(colors::CORAL);

                if ui.add_enabled(!sending, button).clicked() {
                    state.handle_submit();
                }
                if sending {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Sending...");
                }
                if ui.button("Clear form").clicked() {
                    state.submit_form.clear();
                    state.submit_notice = None;
                }
            });
        });
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.colored_label(colors::TEXT_SECONDARY, label);
    ui.add(egui::TextEdit::singleline(value).desired_width(320.0));
    ui.end_row();
}
