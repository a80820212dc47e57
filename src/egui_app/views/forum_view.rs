//! Forum view: thread listing, thread detail, and the compose forms.

use eframe::egui;
use uuid::Uuid;

use crate::egui_app::components::thread_row;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::models::ThreadDetail;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    // Detail and listing are either/or; the clone keeps the borrow of
    // state.open_thread out of the way of the reply input.
    if let Some(detail) = state.open_thread.clone() {
        render_thread(ui, state, &detail);
        return;
    }

    if state.forum_threads.is_none() && state.forum_result.is_none() && state.forum_error.is_none()
    {
        state.load_threads();
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("💬 Community forum")
                        .size(24.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if state.show_thread_form {
                        "Cancel"
                    } else {
                        "＋ New thread"
                    };
                    let button =
                        egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
                            .fill(colors::CORAL);
                    if ui.add(button).clicked() {
                        state.show_thread_form = !state.show_thread_form;
                    }
                });
            });
            ui.add_space(8.0);

            if let Some(notice) = state.forum_notice.clone() {
                ui.horizontal(|ui| {
                    styles::banner_frame(true).show(ui, |ui| {
                        ui.colored_label(colors::TEXT_PRIMARY, notice);
                    });
                    if ui.small_button("✖").clicked() {
                        state.forum_notice = None;
                    }
                });
                ui.add_space(8.0);
            }

            if state.show_thread_form {
                render_thread_form(ui, state);
                ui.add_space(8.0);
            }

            if let Some(error) = state.forum_error.clone() {
                styles::banner_frame(false).show(ui, |ui| {
                    ui.colored_label(colors::ERROR, error);
                });
                if ui.button("Retry").clicked() {
                    state.load_threads();
                }
                return;
            }

            let Some(listing) = &state.forum_threads else {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
                });
                return;
            };

            if listing.threads.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No discussions yet. Start one!");
                return;
            }

            let mut open: Option<Uuid> = None;
            if let Some(listing) = &state.forum_threads {
                for thread in &listing.threads {
                    if thread_row::render(ui, thread) {
                        open = Some(thread.id);
                    }
                    ui.add_space(6.0);
                }
            }
            if let Some(id) = open {
                state.load_thread(id);
            }

            if state.thread_result.is_some() {
                ui.spinner();
            }
        });
}

fn render_thread_form(ui: &mut egui::Ui, state: &mut AppState) {
    styles::card_frame().show(ui, |ui| {
        ui.label(
            egui::RichText::new("Start a discussion")
                .strong()
                .color(colors::TEXT_PRIMARY),
        );
        ui.add_space(6.0);

        egui::Grid::new("thread_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "Title");
                ui.add(
                    egui::TextEdit::singleline(&mut state.thread_form.title)
                        .desired_width(380.0),
                );
                ui.end_row();

                ui.colored_label(colors::TEXT_SECONDARY, "Category");
                ui.add(
                    egui::TextEdit::singleline(&mut state.thread_form.category)
                        .hint_text("General, DeFi, NFTs, ...")
                        .desired_width(380.0),
                );
                ui.end_row();
            });

        ui.colored_label(colors::TEXT_SECONDARY, "What's on your mind?");
        ui.add(
            egui::TextEdit::multiline(&mut state.thread_form.content)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            let posting = state.compose_result.is_some();
            let button =
                egui::Button::new(egui::RichText::new("Post thread").color(colors::TEXT_LIGHT))
                    .fill(colors::CORAL);
            if ui.add_enabled(!posting, button).clicked() {
                state.handle_new_thread();
            }
            if posting {
                ui.spinner();
            }
            if !state.auth_state.authenticated {
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    "Posting as a guest files the thread under the demo account.",
                );
            }
        });
    });
}

fn render_thread(ui: &mut egui::Ui, state: &mut AppState, detail: &ThreadDetail) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            if ui.button("← All discussions").clicked() {
                state.close_thread();
                return;
            }
            ui.add_space(8.0);

            styles::card_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    if detail.is_pinned {
                        ui.label("📌");
                    }
                    if detail.is_hot {
                        ui.colored_label(colors::HOT, "🔥");
                    }
                    ui.label(
                        egui::RichText::new(&detail.title)
                            .size(19.0)
                            .strong()
                            .color(colors::TEXT_PRIMARY),
                    );
                });
                ui.horizontal(|ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, &detail.author);
                    ui.colored_label(colors::SEPARATOR, "·");
                    ui.colored_label(colors::TEXT_SECONDARY, &detail.category);
                    ui.colored_label(colors::SEPARATOR, "·");
                    ui.colored_label(
                        colors::TIMESTAMP,
                        detail.created_at.format("%b %d, %Y").to_string(),
                    );
                });
                ui.add_space(6.0);
                ui.colored_label(colors::TEXT_PRIMARY, &detail.content);
            });

            ui.add_space(10.0);
            let replies = detail.posts.len();
            let label = if replies == 1 {
                "1 reply".to_string()
            } else {
                format!("{} replies", replies)
            };
            ui.colored_label(colors::TEXT_SECONDARY, label);
            ui.add_space(6.0);

            for post in &detail.posts {
                styles::card_frame().show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(&post.author)
                                .strong()
                                .color(colors::TEXT_PRIMARY),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.colored_label(
                                colors::TIMESTAMP,
                                post.created_at.format("%b %d, %H:%M").to_string(),
                            );
                        });
                    });
                    ui.colored_label(colors::TEXT_PRIMARY, &post.content);
                });
                ui.add_space(4.0);
            }

            ui.add_space(10.0);

            if let Some(notice) = state.forum_notice.clone() {
                ui.horizontal(|ui| {
                    styles::banner_frame(true).show(ui, |ui| {
                        ui.colored_label(colors::TEXT_PRIMARY, notice);
                    });
                    if ui.small_button("✖").clicked() {
                        state.forum_notice = None;
                    }
                });
                ui.add_space(6.0);
            }

            if state.auth_state.authenticated {
                styles::card_frame().show(ui, |ui| {
                    ui.colored_label(colors::TEXT_SECONDARY, "Your reply");
                    ui.add(
                        egui::TextEdit::multiline(&mut state.reply_input)
                            .desired_rows(3)
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(6.0);
                    ui.horizontal(|ui| {
                        let posting = state.compose_result.is_some();
                        let button = egui::Button::new(
                            egui::RichText::new("Reply").color(colors::TEXT_LIGHT),
                        )
                        .fill(colors::CORAL);
                        if ui.add_enabled(!posting, button).clicked() {
                            state.handle_reply();
                        }
                        if posting {
                            ui.spinner();
                        }
                    });
                });
            } else {
                ui.colored_label(colors::TEXT_SECONDARY, "Sign in to join the discussion.");
            }
        });
}
