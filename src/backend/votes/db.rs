//! Database operations for voting

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::shared::models::vote::hunt_score;
use crate::shared::models::{VoteKind, VotedProject};

/// A vote row
#[derive(Debug, Clone)]
pub struct Vote {
    pub id: Uuid,
    pub project_id: Uuid,
    pub user_id: Uuid,
    pub vote_type: VoteKind,
    pub created_at: DateTime<Utc>,
}

/// Check whether a project row exists
pub async fn project_exists(pool: &PgPool, project_id: Uuid) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
        .bind(project_id)
        .fetch_one(pool)
        .await?;

    Ok(row.get(0))
}

/// Get a user's vote on a project, if any
pub async fn get_vote(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Vote>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, project_id, user_id, vote_type, created_at
        FROM votes
        WHERE project_id = $1 AND user_id = $2
        "#,
    )
    .bind(project_id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| Vote {
        id: r.get("id"),
        project_id: r.get("project_id"),
        user_id: r.get("user_id"),
        vote_type: VoteKind::from_str(r.get::<String, _>("vote_type").as_str())
            .unwrap_or(VoteKind::Up),
        created_at: r.get("created_at"),
    }))
}

/// Record a new vote
pub async fn insert_vote(
    pool: &PgPool,
    project_id: Uuid,
    user_id: Uuid,
    kind: VoteKind,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO votes (id, project_id, user_id, vote_type)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(project_id)
    .bind(user_id)
    .bind(kind.db_value())
    .execute(pool)
    .await?;

    Ok(())
}

/// Switch an existing vote to the other direction
pub async fn update_vote_kind(pool: &PgPool, vote_id: Uuid, kind: VoteKind) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE votes SET vote_type = $2 WHERE id = $1")
        .bind(vote_id)
        .bind(kind.db_value())
        .execute(pool)
        .await?;

    Ok(())
}

/// Remove a vote
pub async fn delete_vote(pool: &PgPool, vote_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM votes WHERE id = $1")
        .bind(vote_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Count a project's up and down votes in one pass
pub async fn count_votes(pool: &PgPool, project_id: Uuid) -> Result<(i64, i64), sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) FILTER (WHERE vote_type = 'UP') AS up_votes,
               COUNT(*) FILTER (WHERE vote_type = 'DOWN') AS down_votes
        FROM votes
        WHERE project_id = $1
        "#,
    )
    .bind(project_id)
    .fetch_one(pool)
    .await?;

    Ok((row.get("up_votes"), row.get("down_votes")))
}

/// Persist recomputed counters onto the project
///
/// `total_votes` tracks upvotes only; the hunt score weighs both
/// directions and never goes below zero.
pub async fn update_project_score(
    pool: &PgPool,
    project_id: Uuid,
    up_votes: i64,
    down_votes: i64,
) -> Result<VotedProject, sqlx::Error> {
    let row = sqlx::query(
        r#"
        UPDATE projects
        SET total_votes = $2, hunt_score = $3, updated_at = now()
        WHERE id = $1
        RETURNING id, total_votes, hunt_score
        "#,
    )
    .bind(project_id)
    .bind(up_votes as i32)
    .bind(hunt_score(up_votes, down_votes))
    .fetch_one(pool)
    .await?;

    Ok(VotedProject {
        id: row.get("id"),
        total_votes: row.get("total_votes"),
        hunt_score: row.get("hunt_score"),
    })
}
