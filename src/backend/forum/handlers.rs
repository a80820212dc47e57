//! HTTP handlers for the forum

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::{optional_session_user, session_token_from_headers};
use crate::shared::models::{NewPost, NewThread, Pagination, ThreadDetail, ThreadListResponse};

use super::db;

/// Account that owns threads opened without a session. The seeder creates
/// it.
pub const DEMO_USER_EMAIL: &str = "demo@dapphunt.com";

/// Query parameters for `GET /api/forum/threads`
#[derive(Debug, Default, Deserialize)]
pub struct ThreadsQuery {
    /// Category label to narrow to
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// `updatedAt` (default), `createdAt`, or `replyCount`
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default)
    pub order: Option<String>,
}

/// List forum threads
///
/// Pinned threads always lead, hot threads follow, and the requested sort
/// key orders the rest.
pub async fn get_threads(
    State(db_pool): State<Option<PgPool>>,
    Query(params): Query<ThreadsQuery>,
) -> Result<Json<ThreadListResponse>, ApiError> {
    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let category = params.category.as_deref();
    let sort_by = params.sort_by.as_deref().unwrap_or("updatedAt");
    let order = params.order.as_deref().unwrap_or("desc");
    let limit = params.limit.unwrap_or(10).clamp(1, 100);
    let offset = params.offset.unwrap_or(0).max(0);

    let threads = db::list_thread_summaries(pool, category, sort_by, order, limit, offset).await?;
    let total = db::count_threads(pool, category).await?;

    Ok(Json(ThreadListResponse {
        threads,
        pagination: Pagination::new(total, limit, offset),
    }))
}

/// Open a new thread
///
/// `POST /api/forum/threads` - uses the session user when one is presented,
/// otherwise the demo account. Responds 201 with the stored thread.
pub async fn create_thread(
    State(db_pool): State<Option<PgPool>>,
    headers: HeaderMap,
    Json(body): Json<NewThread>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let author_id = match optional_session_user(pool, &headers).await? {
        Some(user) => user.id,
        None => get_user_by_email(pool, DEMO_USER_EMAIL)
            .await?
            .ok_or_else(|| ApiError::not_found("User not found"))?
            .id,
    };

    let thread = db::insert_thread(pool, author_id, &body).await?;
    tracing::info!("Thread opened: {} ({})", thread.title, thread.id);

    Ok((StatusCode::CREATED, Json(thread)))
}

/// Fetch one thread with its replies
///
/// `GET /api/forum/threads/{id}`
pub async fn get_thread(
    State(db_pool): State<Option<PgPool>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ThreadDetail>, ApiError> {
    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let detail = db::get_thread_detail(pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Thread not found"))?;

    Ok(Json(detail))
}

/// Reply to a thread
///
/// `POST /api/forum/threads/{id}/posts` - requires a session. Responds 201
/// with the stored post.
pub async fn create_post(
    State(db_pool): State<Option<PgPool>>,
    Path(thread_id): Path<Uuid>,
    headers: HeaderMap,
    Json(body): Json<NewPost>,
) -> Result<impl IntoResponse, ApiError> {
    if session_token_from_headers(&headers).is_none() {
        return Err(ApiError::unauthorized("You must be signed in to reply"));
    }

    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let user = optional_session_user(pool, &headers)
        .await?
        .ok_or_else(|| ApiError::unauthorized("You must be signed in to reply"))?;

    body.validate()?;

    if !db::thread_exists(pool, thread_id).await? {
        return Err(ApiError::not_found("Thread not found"));
    }

    let post = db::insert_post(pool, thread_id, user.id, &body.content).await?;
    tracing::debug!("Reply added to thread {} by {}", thread_id, user.id);

    Ok((StatusCode::CREATED, Json(post)))
}
