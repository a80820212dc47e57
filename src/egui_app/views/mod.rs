use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::AppView;

pub mod admin_view;
pub mod auth_view;
pub mod calendar_view;
pub mod forum_view;
pub mod home_view;
pub mod leaderboard_view;
pub mod profile_view;
pub mod submit_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("🔍 DappHunt")
                        .size(18.0)
                        .strong()
                        .color(colors::CORAL),
                );
                ui.add_space(12.0);

                for view in [
                    AppView::Home,
                    AppView::Leaderboard,
                    AppView::Forum,
                    AppView::Submit,
                ] {
                    nav_button(ui, state, view);
                }
                if state.auth_state.is_admin() {
                    nav_button(ui, state, AppView::Admin);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(4.0);

                    if state.auth_state.authenticated {
                        if ui.button("Logout").clicked() {
                            state.logout();
                        }

                        let display = state
                            .auth_state
                            .user
                            .as_ref()
                            .map(|user| user.display_name().to_string())
                            .unwrap_or_default();
                        let profile = egui::Button::new(
                            egui::RichText::new(format!("@{}", display))
                                .color(colors::TEXT_PRIMARY),
                        );
                        if ui.add(profile).on_hover_text("Profile").clicked() {
                            state.current_view = AppView::Profile;
                        }
                    } else {
                        let signin = egui::Button::new(
                            egui::RichText::new("Sign in").color(colors::TEXT_LIGHT),
                        )
                        .fill(colors::CORAL);
                        if ui.add(signin).clicked() {
                            state.current_view = AppView::Auth;
                        }
                    }

                    if state.auth_state.loading {
                        ui.spinner();
                    }
                });
            });
        });
}

fn nav_button(ui: &mut egui::Ui, state: &mut AppState, view: AppView) {
    let selected = state.current_view == view;
    let text = if selected {
        egui::RichText::new(view.title()).strong().color(colors::CORAL)
    } else {
        egui::RichText::new(view.title()).color(colors::TEXT_SECONDARY)
    };

    if ui.selectable_label(selected, text).clicked() {
        state.current_view = view;
    }
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(16));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| match state.current_view {
            AppView::Home => home_view::render(ui, state),
            AppView::Leaderboard => leaderboard_view::render(ui, state),
            AppView::Submit => submit_view::render(ui, state),
            AppView::Admin => admin_view::render(ui, state),
            AppView::Profile => profile_view::render(ui, state),
            AppView::Forum => forum_view::render(ui, state),
            AppView::Auth => auth_view::render(ui, state),
        });
}
