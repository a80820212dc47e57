//! Admin review queue: approve or reject filed submissions.

use eframe::egui;
use uuid::Uuid;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::models::SubmissionStatus;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if !state.auth_state.is_admin() {
        ui.add_space(60.0);
        ui.vertical_centered(|ui| {
            styles::card_frame().show(ui, |ui| {
                ui.colored_label(colors::ERROR, "Admin access required");
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    "Sign in with an admin account to review submissions.",
                );
            });
        });
        return;
    }

    if state.admin_queue.is_none() && state.admin_result.is_none() {
        state.load_submissions();
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("🛠 Review queue")
                        .size(24.0)
                        .strong()
                        .color(colors::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Refresh").clicked() {
                        state.admin_queue = None;
                        state.load_submissions();
                    }
                });
            });
            ui.add_space(8.0);

            render_status_filter(ui, state);
            ui.add_space(8.0);

            match state.admin_notice.clone() {
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

            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_SECONDARY, "Rejection reason:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.admin_reason_input)
                        .hint_text("stored as review notes")
                        .desired_width(320.0),
                );
            });
            ui.add_space(8.0);

            let Some(queue) = &state.admin_queue else {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
                });
                return;
            };

            if queue.submissions.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "Nothing in the queue.");
                return;
            }
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("{} submissions", queue.pagination.total),
            );
            ui.add_space(6.0);

            let mut approve: Option<Uuid> = None;
            let mut reject: Option<Uuid> = None;

            if let Some(queue) = &state.admin_queue {
                for submission in &queue.submissions {
                    styles::card_frame().show(ui, |ui| {
                        ui.set_min_width(ui.available_width());

                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(&submission.project_name)
                                    .size(16.0)
                                    .strong()
                                    .color(colors::TEXT_PRIMARY),
                            );
                            status_badge(ui, submission.status);

                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.colored_label(
                                        colors::TIMESTAMP,
                                        submission.created_at.format("%b %d, %Y").to_string(),
                                    );
                                },
                            );
                        });

                        if let Some(ref one_liner) = submission.one_liner {
                            ui.colored_label(colors::TEXT_SECONDARY, one_liner);
                        }
                        ui.horizontal(|ui| {
                            if let Some(ref category) = submission.category {
                                ui.colored_label(
                                    colors::TEXT_SECONDARY,
                                    format!("Category: {}", category),
                                );
                            }
                            ui.colored_label(
                                colors::TEXT_SECONDARY,
                                format!("URL: {}", submission.live_url),
                            );
                        });
                        ui.colored_label(colors::TEXT_SECONDARY, truncate(&submission.description, 180));

                        if let Some(ref notes) = submission.review_notes {
                            ui.colored_label(colors::TIMESTAMP, format!("Notes: {}", notes));
                        }

                        if submission.status == SubmissionStatus::Pending {
                            ui.add_space(6.0);
                            ui.horizontal(|ui| {
                                let approve_btn = egui::Button::new(
                                    egui::RichText::new("✓ Approve").color(colors::TEXT_LIGHT),
                                )
                                .fill(colors::SUCCESS);
                                if ui.add(approve_btn).clicked() {
                                    approve = Some(submission.id);
                                }

                                let reject_btn = egui::Button::new(
                                    egui::RichText::new("✗ Reject").color(colors::TEXT_LIGHT),
                                )
                                .fill(colors::ERROR);
                                if ui.add(reject_btn).clicked() {
                                    reject = Some(submission.id);
                                }
                            });
                        }
                    });
                    ui.add_space(6.0);
                }
            }

            if let Some(id) = approve {
                state.handle_approve(id);
            }
            if let Some(id) = reject {
                state.handle_reject(id);
            }
        });
}

fn render_status_filter(ui: &mut egui::Ui, state: &mut AppState) {
    let options: [(Option<SubmissionStatus>, &str); 5] = [
        (None, "All"),
        (Some(SubmissionStatus::Pending), "Pending"),
        (Some(SubmissionStatus::UnderReview), "Under review"),
        (Some(SubmissionStatus::Approved), "Approved"),
        (Some(SubmissionStatus::Rejected), "Rejected"),
    ];

    ui.horizontal(|ui| {
        for (status, label) in options {
            let selected = state.admin_status_filter == status;
            if ui.selectable_label(selected, label).clicked() && !selected {
                state.admin_status_filter = status;
                state.admin_queue = None;
                state.load_submissions();
            }
        }
    });
}

fn status_badge(ui: &mut egui::Ui, status: SubmissionStatus) {
    egui::Frame::new()
        .fill(styles::status_color(status))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(status.as_str())
                    .size(11.0)
                    .color(colors::TEXT_LIGHT),
            );
        });
}

fn truncate(content: &str, max_len: usize) -> String {
    if content.chars().count() <= max_len {
        content.to_string()
    } else {
        let cut: String = content.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}
