//! HTTP handlers for submission intake and review
//!
//! Filing requires a session; the queue requires a session; approve and
//! reject require the ADMIN role. Approval converts the submission into a
//! LIVE project, creating its category on the fly when the submitted name
//! is new.

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::categories;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{optional_session_user, session_token_from_headers};
use crate::backend::middleware::CurrentUser;
use crate::backend::projects;
use crate::shared::models::project::slugify;
use crate::shared::models::{
    ApproveResponse, ApprovedProject, NewProject, NewSubmission, Pagination, RejectRequest,
    Submission, SubmissionListResponse, SubmissionReceipt, SubmissionStatus, SubmitResponse,
};

use super::db;

/// Query parameters for `GET /api/submissions`
#[derive(Debug, Default, Deserialize)]
pub struct SubmissionsQuery {
    /// Status to narrow to; unknown values are ignored
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// File a new project submission
///
/// `POST /api/submissions` - requires a session; the body is the full
/// application form. Responds 201 with a small receipt.
pub async fn create_submission(
    State(db_pool): State<Option<PgPool>>,
    headers: HeaderMap,
    Json(body): Json<NewSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    if session_token_from_headers(&headers).is_none() {
        return Err(ApiError::unauthorized(
            "You must be signed in to submit a project",
        ));
    }

    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let user = optional_session_user(pool, &headers).await?.ok_or_else(|| {
        ApiError::unauthorized("You must be signed in to submit a project")
    })?;

    body.validate()?;

    let submission = db::insert_submission(pool, user.id, &body).await?;
    tracing::info!(
        "Submission received: {} (id={}, by={})",
        submission.project_name,
        submission.id,
        user.id
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            message: "Submission received successfully!".to_string(),
            submission: SubmissionReceipt {
                id: submission.id,
                project_name: submission.project_name.clone(),
                status: submission.status,
                created_at: submission.created_at,
            },
        }),
    ))
}

/// The review queue, newest first
///
/// `GET /api/submissions?status=PENDING&limit=20&offset=0`
pub async fn get_submissions(
    State(db_pool): State<Option<PgPool>>,
    CurrentUser(user): CurrentUser,
    Query(params): Query<SubmissionsQuery>,
) -> Result<Json<SubmissionListResponse>, StatusCode> {
    let pool = db_pool.as_ref().ok_or(StatusCode::SERVICE_UNAVAILABLE)?;

    let status = params
        .status
        .as_deref()
        .and_then(SubmissionStatus::from_str);
    let status = status.map(|s| s.as_str());
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    let offset = params.offset.unwrap_or(0).max(0);

    let submissions = db::list_submissions(pool, status, limit, offset)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list submissions: {:?}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
    let total = db::count_submissions(pool, status).await.map_err(|e| {
        tracing::error!("Failed to count submissions: {:?}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    tracing::debug!("Submission queue read by {}", user.id);

    Ok(Json(SubmissionListResponse {
        submissions,
        pagination: Pagination::new(total, limit, offset),
    }))
}

/// Approve a pending submission, converting it into a LIVE project
///
/// `POST /api/submissions/{id}/approve` - admin only. The submitted
/// category name is resolved to an existing category or a new one; the
/// project slug comes from the project name and must be free (409).
pub async fn approve_submission(
    State(db_pool): State<Option<PgPool>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApproveResponse>, ApiError> {
    if !user.role.is_admin() {
        return Err(ApiError::forbidden("Admin access required"));
    }

    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let submission = db::get_submission_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Submission not found"))?;

    if submission.status != SubmissionStatus::Pending {
        return Err(ApiError::bad_request("Submission already processed"));
    }

    let category_id = resolve_category(pool, submission.category.as_deref()).await?;

    let slug = slugify(&submission.project_name);
    if slug.is_empty() {
        return Err(ApiError::bad_request(
            "Project name must contain at least one letter or digit",
        ));
    }
    if projects::db::get_project_by_slug(pool, &slug).await?.is_some() {
        return Err(ApiError::conflict(
            "A project with this name already exists",
        ));
    }

    let body = project_body_from(&submission, category_id);
    let project = projects::db::insert_project(pool, &slug, &body, Some(submission.submitted_by))
        .await?;

    db::update_submission_status(
        pool,
        submission.id,
        SubmissionStatus::Approved,
        Some("Automatically approved and converted to project"),
    )
    .await?;

    tracing::info!(
        "Submission approved: {} -> project {} (by admin {})",
        submission.id,
        project.slug,
        user.id
    );

    Ok(Json(ApproveResponse {
        message: "Submission approved successfully".to_string(),
        project: ApprovedProject {
            id: project.id,
            name: project.name,
            slug: project.slug,
            status: project.status,
        },
    }))
}

/// Reject a pending submission
///
/// `POST /api/submissions/{id}/reject` - admin only. The optional reason
/// is stored as the review notes.
pub async fn reject_submission(
    State(db_pool): State<Option<PgPool>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<Uuid>,
    Json(body): Json<RejectRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if !user.role.is_admin() {
        return Err(ApiError::forbidden("Admin access required"));
    }

    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let submission = db::get_submission_by_id(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Submission not found"))?;

    if submission.status != SubmissionStatus::Pending {
        return Err(ApiError::bad_request("Submission already processed"));
    }

    db::update_submission_status(
        pool,
        submission.id,
        SubmissionStatus::Rejected,
        body.reason.as_deref(),
    )
    .await?;

    tracing::info!("Submission rejected: {} (by admin {})", submission.id, user.id);

    Ok(Json(serde_json::json!({ "message": "Submission rejected" })))
}

/// Find or create the category named on the submission
///
/// Submissions without a category yield an uncategorized project.
async fn resolve_category(
    pool: &PgPool,
    name: Option<&str>,
) -> Result<Option<Uuid>, sqlx::Error> {
    let name = match name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(None),
    };

    if let Some(category) = categories::db::get_category_by_name(pool, name).await? {
        return Ok(Some(category.id));
    }

    let slug = categories::db::category_slug(name);
    let description = format!("{} applications", name);
    let category = categories::db::insert_category(pool, name, &slug, Some(&description), None)
        .await?;
    tracing::info!("Category created from submission: {} ({})", name, slug);

    Ok(Some(category.id))
}

fn project_body_from(submission: &Submission, category_id: Option<Uuid>) -> NewProject {
    NewProject {
        name: submission.project_name.clone(),
        description: submission.description.clone(),
        live_url: submission.live_url.clone(),
        solana_address: submission.solana_address.clone(),
        one_liner: submission.one_liner.clone(),
        logo_url: None,
        github_url: submission.github_repo.clone(),
        twitter_handle: submission.twitter.clone(),
        discord_url: submission.discord.clone(),
        telegram_url: submission.telegram.clone(),
        blog_url: submission.blog.clone(),
        token_symbol: submission.token_symbol.clone(),
        token_address: submission.token_address.clone(),
        tvl: submission.tvl.clone(),
        category_id,
        launch_date: Some(submission.launch_date),
    }
}
