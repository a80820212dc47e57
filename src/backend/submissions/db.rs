//! Database operations for submissions

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::shared::models::{NewSubmission, Submission, SubmissionStatus};

fn submission_from_row(row: &PgRow) -> Submission {
    Submission {
        id: row.get("id"),
        project_name: row.get("project_name"),
        one_liner: row.get("one_liner"),
        category: row.get("category"),
        sub_category: row.get("sub_category"),
        description: row.get("description"),
        key_features: row.get("key_features"),
        unique_value: row.get("unique_value"),
        target_audience: row.get("target_audience"),
        solana_address: row.get("solana_address"),
        github_repo: row.get("github_repo"),
        live_url: row.get("live_url"),
        testnet_url: row.get("testnet_url"),
        audit_status: row.get("audit_status"),
        token_symbol: row.get("token_symbol"),
        token_address: row.get("token_address"),
        tvl: row.get("tvl"),
        revenue_model: row.get("revenue_model"),
        token_distribution: row.get("token_distribution"),
        founders: row.get("founders"),
        team_size: row.get("team_size"),
        twitter: row.get("twitter"),
        discord: row.get("discord"),
        telegram: row.get("telegram"),
        blog: row.get("blog"),
        launch_date: row.get("launch_date"),
        current_stage: row.get("current_stage"),
        funding_status: row.get("funding_status"),
        achievements: row.get("achievements"),
        status: SubmissionStatus::from_str(row.get::<String, _>("status").as_str())
            .unwrap_or_default(),
        review_notes: row.get("review_notes"),
        submitted_by: row.get("submitted_by"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// List submissions, newest first, optionally narrowed to one status
pub async fn list_submissions(
    pool: &PgPool,
    status: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Submission>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, project_name, one_liner, category, sub_category, description,
               key_features, unique_value, target_audience, solana_address, github_repo,
               live_url, testnet_url, audit_status, token_symbol, token_address, tvl,
               revenue_model, token_distribution, founders, team_size, twitter, discord,
               telegram, blog, launch_date, current_stage, funding_status, achievements,
               status, review_notes, submitted_by, created_at, updated_at
        FROM submissions
        WHERE ($1::text IS NULL OR status = $1)
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(submission_from_row).collect())
}

/// Count submissions matching the same filter as `list_submissions`
pub async fn count_submissions(pool: &PgPool, status: Option<&str>) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*)
        FROM submissions
        WHERE ($1::text IS NULL OR status = $1)
        "#,
    )
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(row.get(0))
}

/// Get a submission by ID
pub async fn get_submission_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<Submission>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, project_name, one_liner, category, sub_category, description,
               key_features, unique_value, target_audience, solana_address, github_repo,
               live_url, testnet_url, audit_status, token_symbol, token_address, tvl,
               revenue_model, token_distribution, founders, team_size, twitter, discord,
               telegram, blog, launch_date, current_stage, funding_status, achievements,
               status, review_notes, submitted_by, created_at, updated_at
        FROM submissions
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(submission_from_row))
}

/// Insert a submission; status takes its PENDING column default
///
/// `launch_date` defaults to now when the form leaves it out.
pub async fn insert_submission(
    pool: &PgPool,
    submitted_by: Uuid,
    body: &NewSubmission,
) -> Result<Submission, sqlx::Error> {
    let launch_date = body.launch_date.unwrap_or_else(chrono::Utc::now);

    let row = sqlx::query(
        r#"
        INSERT INTO submissions (id, project_name, one_liner, category, sub_category,
                                 description, key_features, unique_value, target_audience,
                                 solana_address, github_repo, live_url, testnet_url,
                                 audit_status, token_symbol, token_address, tvl,
                                 revenue_model, token_distribution, founders, team_size,
                                 twitter, discord, telegram, blog, launch_date,
                                 current_stage, funding_status, achievements, submitted_by)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16,
                $17, $18, $19, $20, $21, $22, $23, $24, $25, $26, $27, $28, $29, $30)
        RETURNING id, project_name, one_liner, category, sub_category, description,
                  key_features, unique_value, target_audience, solana_address, github_repo,
                  live_url, testnet_url, audit_status, token_symbol, token_address, tvl,
                  revenue_model, token_distribution, founders, team_size, twitter, discord,
                  telegram, blog, launch_date, current_stage, funding_status, achievements,
                  status, review_notes, submitted_by, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.project_name)
    .bind(&body.one_liner)
    .bind(&body.category)
    .bind(&body.sub_category)
    .bind(&body.description)
    .bind(&body.key_features)
    .bind(&body.unique_value)
    .bind(&body.target_audience)
    .bind(&body.solana_address)
    .bind(&body.github_repo)
    .bind(&body.live_url)
    .bind(&body.testnet_url)
    .bind(&body.audit_status)
    .bind(&body.token_symbol)
    .bind(&body.token_address)
    .bind(&body.tvl)
    .bind(&body.revenue_model)
    .bind(&body.token_distribution)
    .bind(&body.founders)
    .bind(&body.team_size)
    .bind(&body.twitter)
    .bind(&body.discord)
    .bind(&body.telegram)
    .bind(&body.blog)
    .bind(launch_date)
    .bind(&body.current_stage)
    .bind(&body.funding_status)
    .bind(&body.achievements)
    .bind(submitted_by)
    .fetch_one(pool)
    .await?;

    Ok(submission_from_row(&row))
}

/// Set a submission's review outcome
pub async fn update_submission_status(
    pool: &PgPool,
    id: Uuid,
    status: SubmissionStatus,
    review_notes: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE submissions
        SET status = $2, review_notes = $3, updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(status.as_str())
    .bind(review_notes)
    .execute(pool)
    .await?;

    Ok(())
}
