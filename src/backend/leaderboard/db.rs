//! Database operations for the leaderboard

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use crate::backend::projects::db::project_from_row;
use crate::shared::models::LeaderboardEntry;

/// Rank LIVE projects launched inside the period window
///
/// `period_votes` counts each project's votes cast inside the same window;
/// `period_score` weighs them on top of the standing hunt score. Ordering
/// follows the directory's standing counters, not the period counters, so
/// the ranks stay stable while a period is underway.
pub async fn list_period_ranked(
    pool: &PgPool,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    featured: Option<bool>,
    limit: i64,
) -> Result<Vec<LeaderboardEntry>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT p.id, p.name, p.slug, p.one_liner, p.description, p.logo_url, p.live_url,
               p.github_url, p.twitter_handle, p.discord_url, p.telegram_url, p.blog_url,
               p.solana_address, p.token_symbol, p.token_address, p.tvl, p.launch_date,
               p.status, p.featured, p.hunt_score, p.total_votes, p.created_at, p.updated_at,
               c.id AS category_id, c.name AS category_name, c.slug AS category_slug,
               c.color AS category_color,
               u.id AS owner_id, u.name AS owner_name, u.username AS owner_username,
               (SELECT COUNT(*) FROM votes v
                WHERE v.project_id = p.id
                  AND v.created_at >= $1 AND v.created_at <= $2) AS period_votes
        FROM projects p
        LEFT JOIN categories c ON c.id = p.category_id
        LEFT JOIN users u ON u.id = p.owner_id
        WHERE p.status = 'LIVE'
          AND p.launch_date >= $1 AND p.launch_date <= $2
          AND ($3::boolean IS NULL OR p.featured = $3)
        ORDER BY p.hunt_score DESC, p.total_votes DESC, p.created_at DESC
        LIMIT $4
        "#,
    )
    .bind(start)
    .bind(end)
    .bind(featured)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let project = project_from_row(row);
            let period_votes: i64 = row.get("period_votes");
            let period_score = period_votes * 10 + i64::from(project.hunt_score);

            LeaderboardEntry {
                project,
                rank: index as i64 + 1,
                period_votes,
                period_score,
            }
        })
        .collect())
}
