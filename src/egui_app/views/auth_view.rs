//! Sign-in view.
//!
//! The backend only speaks Google OAuth, which needs a browser. The desktop
//! flow: open the sign-in page, complete the Google consent screen, copy the
//! `token` field from the callback's JSON body and paste it here. The token
//! is validated against /api/auth/me before the session is accepted.

use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available_rect = ui.available_rect_before_wrap();

    // Center the content vertically and horizontally
    ui.scope_builder(egui::UiBuilder::new().max_rect(available_rect), |ui| {
        ui.vertical_centered(|ui| {
            let top_space = ((available_rect.height() - 380.0) / 2.0).max(0.0);
            ui.add_space(top_space);

            ui.label(
                egui::RichText::new("🔍 DappHunt")
                    .size(32.0)
                    .strong()
                    .color(colors::CORAL),
            );
            ui.add_space(16.0);

            ui.label(
                egui::RichText::new("Sign in with Google")
                    .size(22.0)
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(16.0);

            if let Some(ref error) = state.auth_state.error {
                ui.colored_label(colors::ERROR, error);
                ui.add_space(10.0);
            }

            styles::card_frame().show(ui, |ui| {
                ui.set_max_width(440.0);

                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    "1. Open the sign-in page and finish the Google consent screen.",
                );
                ui.add_space(6.0);

                let signin_url = state.config.api_url("/api/auth/signin");
                ui.horizontal(|ui| {
                    let open = egui::Button::new(
                        egui::RichText::new("Open sign-in page").color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::CORAL);
                    if ui.add(open).clicked() {
                        ui.ctx().open_url(egui::OpenUrl::new_tab(&signin_url));
                    }
                    ui.colored_label(colors::TIMESTAMP, egui::RichText::new(signin_url).size(11.0));
                });

                ui.add_space(10.0);
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    "2. Copy the \"token\" value from the page shown after signing in.",
                );
                ui.add_space(10.0);
                ui.colored_label(colors::TEXT_SECONDARY, "3. Paste it below.");
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.add_sized(
                        [300.0, 28.0],
                        egui::TextEdit::singleline(&mut state.token_input)
                            .hint_text("session token")
                            .text_color(colors::TEXT_PRIMARY),
                    );

                    let signin = egui::Button::new(
                        egui::RichText::new("Sign in").color(colors::TEXT_LIGHT),
                    )
                    .fill(colors::CORAL);
                    if ui.add_sized([90.0, 28.0], signin).clicked() {
                        state.auth_state.clear_error();
                        state.handle_signin_with_token();
                    }
                });

                if state.auth_state.loading {
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("Checking token...").color(colors::TEXT_SECONDARY),
                        );
                        ui.spinner();
                    });
                }
            });

            ui.add_space(12.0);
            ui.colored_label(
                colors::TIMESTAMP,
                "Browsing, the leaderboard and the forum all work without signing in.",
            );
        });
    });
}
