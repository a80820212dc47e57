//! HTTP handler for category listing

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use sqlx::PgPool;

use crate::backend::error::ApiError;
use crate::shared::models::CategoryListResponse;

use super::db;

/// `GET /api/categories` - every category with its LIVE project count
pub async fn get_categories(
    State(db_pool): State<Option<PgPool>>,
) -> Result<Json<CategoryListResponse>, ApiError> {
    let pool = db_pool.as_ref().ok_or_else(|| {
        ApiError::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    })?;

    let categories = db::list_category_summaries(pool).await?;
    let total = categories.len();

    Ok(Json(CategoryListResponse { categories, total }))
}
