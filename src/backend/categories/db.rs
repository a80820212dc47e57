//! Database operations for categories

use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::shared::models::{Category, CategorySummary};

fn category_from_row(row: &PgRow) -> Category {
    Category {
        id: row.get("id"),
        name: row.get("name"),
        slug: row.get("slug"),
        description: row.get("description"),
        color: row.get("color"),
        created_at: row.get("created_at"),
    }
}

/// Slug for a category name: lowercased, runs of whitespace become a dash
///
/// Unlike project slugs, punctuation is kept as-is.
pub fn category_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// All categories with their LIVE project counts, ordered by name
pub async fn list_category_summaries(pool: &PgPool) -> Result<Vec<CategorySummary>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT c.id, c.name, c.slug, c.description, c.color,
               COUNT(p.id) FILTER (WHERE p.status = 'LIVE') AS project_count
        FROM categories c
        LEFT JOIN projects p ON p.category_id = c.id
        GROUP BY c.id, c.name, c.slug, c.description, c.color
        ORDER BY c.name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .iter()
        .map(|row| CategorySummary {
            id: row.get("id"),
            name: row.get("name"),
            slug: row.get("slug"),
            description: row.get("description"),
            color: row.get("color"),
            project_count: row.get("project_count"),
        })
        .collect())
}

/// Look a category up by its exact display name
pub async fn get_category_by_name(
    pool: &PgPool,
    name: &str,
) -> Result<Option<Category>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, name, slug, description, color, created_at
        FROM categories
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(category_from_row))
}

/// Create a category and return it
pub async fn insert_category(
    pool: &PgPool,
    name: &str,
    slug: &str,
    description: Option<&str>,
    color: Option<&str>,
) -> Result<Category, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO categories (id, name, slug, description, color)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, name, slug, description, color, created_at
        "#,
    )
    .bind(uuid::Uuid::new_v4())
    .bind(name)
    .bind(slug)
    .bind(description)
    .bind(color)
    .fetch_one(pool)
    .await?;

    Ok(category_from_row(&row))
}
