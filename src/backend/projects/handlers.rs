//! HTTP handlers for the project directory
//!
//! Listing and detail are public; creation validates the body before any
//! database work so the 400s name the offending field.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::shared::models::project::slugify;
use crate::shared::models::{NewProject, Pagination, Project, ProjectListResponse};

use super::db;

/// Query parameters for `GET /api/projects`
#[derive(Debug, Default, Deserialize)]
pub struct ProjectsQuery {
    /// Category slug to filter by
    pub category: Option<String>,
    /// Pass `true` to only return featured projects
    pub featured: Option<String>,
    /// `huntScore` (default), `totalVotes` or `createdAt`
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default)
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// The featured filter only engages on the literal string "true"
fn featured_filter(param: Option<&str>) -> Option<bool> {
    matches!(param, Some("true")).then_some(true)
}

/// List LIVE projects with filtering, sorting and pagination
///
/// `GET /api/projects?category=defi&featured=true&sortBy=huntScore&order=desc&limit=10&offset=0`
pub async fn get_projects(
    State(db_pool): State<Option<PgPool>>,
    Query(params): Query<ProjectsQuery>,
) -> Result<Json<ProjectListResponse>, ApiError> {
    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let category = params.category.as_deref();
    let featured = featured_filter(params.featured.as_deref());
    let sort_by = params.sort_by.as_deref().unwrap_or("huntScore");
    let order = params.order.as_deref().unwrap_or("desc");
    let limit = params.limit.unwrap_or(10).clamp(1, 100);
    let offset = params.offset.unwrap_or(0).max(0);

    let projects =
        db::list_projects(pool, category, featured, sort_by, order, limit, offset).await?;
    let total = db::count_projects(pool, category, featured).await?;

    Ok(Json(ProjectListResponse {
        projects,
        pagination: Pagination::new(total, limit, offset),
    }))
}

/// Fetch a single project by slug
///
/// `GET /api/projects/{slug}` - 404 when no project carries the slug.
pub async fn get_project_by_slug(
    State(db_pool): State<Option<PgPool>>,
    Path(slug): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let project = db::get_project_by_slug(pool, &slug)
        .await?
        .ok_or_else(|| ApiError::not_found("Project not found"))?;

    Ok(Json(project))
}

/// Create a project directly in the directory
///
/// `POST /api/projects` - the slug is derived from the name and must be
/// unique (409 otherwise). Responds 201 with the created project.
pub async fn create_project(
    State(db_pool): State<Option<PgPool>>,
    Json(body): Json<NewProject>,
) -> Result<impl IntoResponse, ApiError> {
    body.validate()?;

    let slug = slugify(&body.name);
    if slug.is_empty() {
        return Err(ApiError::bad_request(
            "Project name must contain at least one letter or digit",
        ));
    }

    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    if db::get_project_by_slug(pool, &slug).await?.is_some() {
        return Err(ApiError::conflict(
            "A project with this name already exists",
        ));
    }

    let project = db::insert_project(pool, &slug, &body, None).await?;
    tracing::info!("Project created: {} ({})", project.name, project.slug);

    Ok((StatusCode::CREATED, Json(project)))
}
