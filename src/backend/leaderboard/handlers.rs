//! HTTP handler for the leaderboard

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Datelike, Utc};
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::shared::models::{LeaderboardResponse, PeriodInfo, PeriodType};

use super::db;
use super::period::period_range;

/// Query parameters for `GET /api/leaderboard`
#[derive(Debug, Default, Deserialize)]
pub struct LeaderboardQuery {
    /// `daily`, `weekly`, `monthly` (default) or `yearly`
    pub period: Option<String>,
    /// Defaults to the current year
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub week: Option<u32>,
    /// `featured` narrows to featured projects; anything else means all
    pub filter: Option<String>,
    pub limit: Option<i64>,
}

/// Period-ranked project listing
///
/// `GET /api/leaderboard?period=weekly&year=2025&month=6&week=2&filter=featured&limit=50`
///
/// The response echoes the resolved period window so clients can label
/// what they are showing.
pub async fn get_leaderboard(
    State(db_pool): State<Option<PgPool>>,
    Query(params): Query<LeaderboardQuery>,
) -> Result<Json<LeaderboardResponse>, ApiError> {
    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let period = params
        .period
        .as_deref()
        .and_then(PeriodType::from_str)
        .unwrap_or_default();
    let year = params
        .year
        .unwrap_or_else(|| Utc::now().year())
        .clamp(1970, 9999);
    let filter = params.filter.as_deref().unwrap_or("all").to_string();
    let featured = (filter == "featured").then_some(true);
    let limit = params.limit.unwrap_or(50).clamp(1, 100);

    let (start_date, end_date) = period_range(period, year, params.month, params.week);

    let leaderboard = db::list_period_ranked(pool, start_date, end_date, featured, limit).await?;
    let total = leaderboard.len();

    tracing::debug!(
        "Leaderboard: period={} range=[{}, {}] rows={}",
        period.as_str(),
        start_date,
        end_date,
        total
    );

    Ok(Json(LeaderboardResponse {
        leaderboard,
        period: PeriodInfo {
            period_type: period,
            year,
            month: params.month,
            week: params.week,
            start_date,
            end_date,
        },
        filter,
        total,
    }))
}
