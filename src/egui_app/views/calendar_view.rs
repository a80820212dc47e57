//! Month-grid week picker for the weekly leaderboard.
//!
//! Weeks follow the leaderboard's convention: days 1-7 are week 1, 8-14
//! week 2, and so on up to week 5.

use chrono::{Datelike, NaiveDate};
use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Render the day grid for the filter's current month.
/// Returns true when a day was clicked and the selected week changed.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut changed = false;

    styles::sidebar_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.colored_label(
                colors::TEXT_PRIMARY,
                egui::RichText::new("Pick a week").strong(),
            );
            ui.colored_label(
                colors::TEXT_SECONDARY,
                format!("(week {} selected)", state.filter.week),
            );
        });
        ui.add_space(6.0);

        let days = days_in_month(state.filter.year, state.filter.month);
        let selected_week = state.filter.week;

        egui::Grid::new("week_picker")
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for day in 1..=days {
                    let week = week_of_day(day);
                    let in_selected_week = week == selected_week;

                    let button = egui::Button::new(
                        egui::RichText::new(format!("{:2}", day)).color(if in_selected_week {
                            colors::TEXT_LIGHT
                        } else {
                            colors::TEXT_PRIMARY
                        }),
                    )
                    .min_size(egui::vec2(34.0, 28.0))
                    .fill(if in_selected_week {
                        colors::CORAL
                    } else {
                        colors::CARD_BG
                    });

                    if ui.add(button).clicked() && week != selected_week {
                        state.filter.week = week;
                        changed = true;
                    }

                    if day % 7 == 0 {
                        ui.end_row();
                    }
                }
            });
    });

    changed
}

/// Week number a day of the month falls into (1-5)
fn week_of_day(day: u32) -> u32 {
    (day + 6) / 7
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(30)
}
