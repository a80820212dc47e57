//! Leaderboard period windows
//!
//! Maps a period selection onto a `[start, end]` range of UTC-midnight
//! instants. Both endpoints are compared inclusively, so a "weekly" window
//! covers seven days plus the first instant of the eighth, and votes cast
//! later on Dec 31 fall outside the yearly window. The web API has always
//! behaved this way and the client's calendar is built around it.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::shared::models::PeriodType;

/// Compute the date range for a period selection
///
/// - `daily`/`monthly` with a month: the first through the last day of
///   that month;
/// - `weekly` with a month and week: the first of the month plus
///   `(week - 1) * 7` days, through seven days later;
/// - everything else (including `yearly`, and months outside 1..=12):
///   Jan 1 through Dec 31 of the year.
pub fn period_range(
    period: PeriodType,
    year: i32,
    month: Option<u32>,
    week: Option<u32>,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let (start, end) = match (period, month, week) {
        (PeriodType::Daily, Some(m), _) | (PeriodType::Monthly, Some(m), _) => {
            match (first_of_month(year, m), last_day_of_month(year, m)) {
                (Some(start), Some(end)) => (start, end),
                _ => year_span(year),
            }
        }
        (PeriodType::Weekly, Some(m), Some(w)) => match first_of_month(year, m) {
            Some(first) => {
                let start = first + Duration::days((i64::from(w) - 1) * 7);
                (start, start + Duration::days(7))
            }
            None => year_span(year),
        },
        _ => year_span(year),
    };

    (utc_midnight(start), utc_midnight(end))
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// The last day of a month, or `None` when the month is out of range
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    next.map(|d| d - Duration::days(1))
}

fn year_span(year: i32) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or_default();
    (start, end)
}

fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    DateTime::from_naive_utc_and_offset(date.and_time(NaiveTime::MIN), Utc)
}
