//! Leaderboard view: period filters, the calendar picker, and the ranking.

use eframe::egui;
use uuid::Uuid;

use crate::egui_app::components::project_card;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::views::calendar_view;
use crate::shared::models::{PeriodType, VoteKind};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.leaderboard.is_none()
        && state.leaderboard_result.is_none()
        && state.leaderboard_error.is_none()
    {
        state.load_leaderboard();
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("🏆 Leaderboard")
                    .size(24.0)
                    .strong()
                    .color(colors::TEXT_PRIMARY),
            );
            ui.add_space(8.0);

            let changed = render_filter_row(ui, state);

            if state.filter.period == PeriodType::Weekly {
                ui.add_space(8.0);
                if calendar_view::render(ui, state) {
                    refresh(state);
                }
            }

            if changed {
                refresh(state);
            }

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

            if let Some(error) = state.leaderboard_error.clone() {
                styles::banner_frame(false).show(ui, |ui| {
                    ui.colored_label(colors::ERROR, error);
                });
                if ui.button("Retry").clicked() {
                    state.load_leaderboard();
                }
                return;
            }

            let Some(response) = &state.leaderboard else {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.spinner();
                    ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
                });
                return;
            };

            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!(
                    "{} – {} · {} projects",
                    response.period.start_date.format("%b %d, %Y"),
                    response.period.end_date.format("%b %d, %Y"),
                    response.total
                ),
            );
            ui.add_space(8.0);

            if response.leaderboard.is_empty() {
                ui.colored_label(colors::TEXT_SECONDARY, "No votes in this period yet.");
                return;
            }

            let mut vote_action: Option<(Uuid, VoteKind)> = None;
            if let Some(response) = &state.leaderboard {
                for entry in &response.leaderboard {
                    if let Some(kind) = project_card::render(ui, entry) {
                        vote_action = Some((entry.project.id, kind));
                    }
                    ui.add_space(6.0);
                }
            }
            if let Some((project_id, kind)) = vote_action {
                state.handle_vote(project_id, kind);
            }
        });
}

/// Period and window selectors. Returns true when a selection changed.
fn render_filter_row(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut changed = false;

    ui.horizontal_wrapped(|ui| {
        for period in [
            PeriodType::Daily,
            PeriodType::Weekly,
            PeriodType::Monthly,
            PeriodType::Yearly,
        ] {
            let selected = state.filter.period == period;
            let text = if selected {
                egui::RichText::new(period.as_str()).strong().color(colors::CORAL)
            } else {
                egui::RichText::new(period.as_str()).color(colors::TEXT_SECONDARY)
            };
            if ui.selectable_label(selected, text).clicked() && !selected {
                state.filter.period = period;
                changed = true;
            }
        }

        ui.separator();

        if ui.small_button("◀").clicked() {
            state.filter.year -= 1;
            changed = true;
        }
        ui.colored_label(colors::TEXT_PRIMARY, format!("{}", state.filter.year));
        if ui.small_button("▶").clicked() {
            state.filter.year += 1;
            changed = true;
        }

        if state.filter.period != PeriodType::Yearly {
            ui.separator();
            let month_label = MONTHS[(state.filter.month as usize - 1).min(11)];
            egui::ComboBox::from_id_salt("month_filter")
                .selected_text(month_label)
                .show_ui(ui, |ui| {
                    for (i, name) in MONTHS.iter().enumerate() {
                        let month = i as u32 + 1;
                        if ui
                            .selectable_value(&mut state.filter.month, month, *name)
                            .changed()
                        {
                            changed = true;
                        }
                    }
                });
        }

        ui.separator();
        if ui
            .checkbox(&mut state.filter.featured_only, "Featured only")
            .changed()
        {
            changed = true;
        }
    });

    changed
}

fn refresh(state: &mut AppState) {
    state.leaderboard = None;
    state.leaderboard_error = None;
    state.load_leaderboard();
}
