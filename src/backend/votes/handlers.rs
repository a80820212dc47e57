//! HTTP handlers for voting
//!
//! Casting requires a session and the body's `user_id` must match the
//! signed-in user; the stats endpoint is public. Field validation runs
//! before any session or database work so the 400 contract holds even
//! when neither is available.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{optional_session_user, session_token_from_headers};
use crate::shared::models::{VoteKind, VoteRequest, VoteResponse, VoteStats};

use super::db;

/// Query parameters for `GET /api/projects/{id}/vote`
#[derive(Debug, Default, Deserialize)]
pub struct VoteStatsQuery {
    /// When present, the response reports this user's current vote
    pub user_id: Option<Uuid>,
}

/// Cast, switch or remove a vote on a project
///
/// `POST /api/projects/{id}/vote` with `{ user_id, vote_type }`.
/// Repeating the recorded direction removes the vote; the opposite
/// direction switches it. Either way the project's `total_votes` and
/// `hunt_score` are recomputed from the votes table.
pub async fn vote_on_project(
    State(db_pool): State<Option<PgPool>>,
    Path(project_id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<VoteRequest>,
) -> Result<Json<VoteResponse>, ApiError> {
    let (user_id, vote_type) = match (body.user_id, body.vote_type.as_deref()) {
        (Some(user_id), Some(vote_type)) if !vote_type.trim().is_empty() => (user_id, vote_type),
        _ => {
            return Err(ApiError::bad_request(
                "Project ID, vote type, and user ID are required",
            ))
        }
    };

    let kind = VoteKind::from_str(vote_type).ok_or_else(|| {
        ApiError::bad_request("Vote type must be either \"up\" or \"down\"")
    })?;

    if session_token_from_headers(&headers).is_none() {
        return Err(ApiError::unauthorized("You must be signed in to vote"));
    }

    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let session_user = optional_session_user(pool, &headers)
        .await?
        .ok_or_else(|| ApiError::unauthorized("You must be signed in to vote"))?;

    if session_user.id != user_id {
        return Err(ApiError::forbidden("You can only vote as yourself"));
    }

    if !db::project_exists(pool, project_id).await? {
        return Err(ApiError::not_found("Project not found"));
    }

    let existing = db::get_vote(pool, project_id, user_id).await?;

    match &existing {
        // Same direction again: toggle the vote off
        Some(vote) if vote.vote_type == kind => {
            db::delete_vote(pool, vote.id).await?;
            let (up_votes, down_votes) = db::count_votes(pool, project_id).await?;
            let project = db::update_project_score(pool, project_id, up_votes, down_votes).await?;

            tracing::info!("Vote removed: project={} user={}", project_id, user_id);
            return Ok(Json(VoteResponse {
                message: "Vote removed".to_string(),
                action: "removed".to_string(),
                vote_type: None,
                up_votes: None,
                down_votes: None,
                new_vote_count: project.total_votes,
                project: None,
            }));
        }
        Some(vote) => {
            db::update_vote_kind(pool, vote.id, kind).await?;
        }
        None => {
            db::insert_vote(pool, project_id, user_id, kind).await?;
        }
    }

    let switched = existing.is_some();
    let (up_votes, down_votes) = db::count_votes(pool, project_id).await?;
    let project = db::update_project_score(pool, project_id, up_votes, down_votes).await?;

    let (message, action) = if switched {
        ("Vote updated", "updated")
    } else {
        ("Vote recorded", "created")
    };

    tracing::info!(
        "Vote {}: project={} user={} type={}",
        action,
        project_id,
        user_id,
        kind.as_str()
    );

    Ok(Json(VoteResponse {
        message: message.to_string(),
        action: action.to_string(),
        vote_type: Some(kind),
        up_votes: Some(up_votes),
        down_votes: Some(down_votes),
        new_vote_count: project.total_votes,
        project: Some(project),
    }))
}

/// Vote counts for a project, plus the querying user's own vote
///
/// `GET /api/projects/{id}/vote?user_id=..` - `user_vote` is null unless a
/// `user_id` is supplied and that user has voted.
pub async fn get_vote_stats(
    State(db_pool): State<Option<PgPool>>,
    Path(project_id): Path<Uuid>,
    Query(params): Query<VoteStatsQuery>,
) -> Result<Json<VoteStats>, ApiError> {
    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    if !db::project_exists(pool, project_id).await? {
        return Err(ApiError::not_found("Project not found"));
    }

    let (up_votes, down_votes) = db::count_votes(pool, project_id).await?;

    let user_vote = match params.user_id {
        Some(user_id) => db::get_vote(pool, project_id, user_id)
            .await?
            .map(|vote| vote.vote_type),
        None => None,
    };

    Ok(Json(VoteStats {
        up_votes,
        down_votes,
        user_vote,
    }))
}
