//! Database operations for the project directory
//!
//! Every query joins the project's category and owner so responses can
//! embed both references; rows are mapped by hand because `Project` nests
//! them as structs.

use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::shared::models::{CategoryRef, NewProject, OwnerRef, Project, ProjectStatus};

/// Map a joined project row onto the shared `Project` type
///
/// Expects the category columns aliased as `category_*` and the owner
/// columns as `owner_*`; a NULL `category_id`/`owner_id` yields `None`.
pub(crate) fn project_from_row(row: &PgRow) -> Project {
    let category = row
        .get::<Option<Uuid>, _>("category_id")
        .map(|id| CategoryRef {
            id,
            name: row.get("category_name"),
            slug: row.get("category_slug"),
            color: row.get("category_color"),
        });

    let owner = row.get::<Option<Uuid>, _>("owner_id").map(|id| OwnerRef {
        id,
        name: row.get("owner_name"),
        username: row.get("owner_username"),
    });

    Project {
        id: row.get("id"),
        name: row.get("name"),
        slug: row.get("slug"),
        one_liner: row.get("one_liner"),
        description: row.get("description"),
        logo_url: row.get("logo_url"),
        live_url: row.get("live_url"),
        github_url: row.get("github_url"),
        twitter_handle: row.get("twitter_handle"),
        discord_url: row.get("discord_url"),
        telegram_url: row.get("telegram_url"),
        blog_url: row.get("blog_url"),
        solana_address: row.get("solana_address"),
        token_symbol: row.get("token_symbol"),
        token_address: row.get("token_address"),
        tvl: row.get("tvl"),
        launch_date: row.get("launch_date"),
        status: ProjectStatus::from_str(row.get::<String, _>("status").as_str())
            .unwrap_or_default(),
        featured: row.get("featured"),
        hunt_score: row.get("hunt_score"),
        total_votes: row.get("total_votes"),
        category,
        owner,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Map the `sortBy` query value onto a column; unknown values fall back
/// to the hunt score. Only these fixed names ever reach the query string.
fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "totalVotes" => "p.total_votes",
        "createdAt" => "p.created_at",
        _ => "p.hunt_score",
    }
}

fn sort_direction(order: &str) -> &'static str {
    if order.eq_ignore_ascii_case("asc") {
        "ASC"
    } else {
        "DESC"
    }
}

/// List LIVE projects with optional category/featured filters
pub async fn list_projects(
    pool: &PgPool,
    category: Option<&str>,
    featured: Option<bool>,
    sort_by: &str,
    order: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<Project>, sqlx::Error> {
    let sql = format!(
        r#"
        SELECT p.id, p.name, p.slug, p.one_liner, p.description, p.logo_url, p.live_url,
               p.github_url, p.twitter_handle, p.discord_url, p.telegram_url, p.blog_url,
               p.solana_address, p.token_symbol, p.token_address, p.tvl, p.launch_date,
               p.status, p.featured, p.hunt_score, p.total_votes, p.created_at, p.updated_at,
               c.id AS category_id, c.name AS category_name, c.slug AS category_slug,
               c.color AS category_color,
               u.id AS owner_id, u.name AS owner_name, u.username AS owner_username
        FROM projects p
        LEFT JOIN categories c ON c.id = p.category_id
        LEFT JOIN users u ON u.id = p.owner_id
        WHERE p.status = 'LIVE'
          AND ($1::text IS NULL OR c.slug = $1)
          AND ($2::boolean IS NULL OR p.featured = $2)
        ORDER BY {} {}
        LIMIT $3 OFFSET $4
        "#,
        sort_column(sort_by),
        sort_direction(order),
    );

    let rows = sqlx::query(&sql)
        .bind(category)
        .bind(featured)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows.iter().map(project_from_row).collect())
}

/// Count LIVE projects matching the same filters as `list_projects`
pub async fn count_projects(
    pool: &PgPool,
    category: Option<&str>,
    featured: Option<bool>,
) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*)
        FROM projects p
        LEFT JOIN categories c ON c.id = p.category_id
        WHERE p.status = 'LIVE'
          AND ($1::text IS NULL OR c.slug = $1)
          AND ($2::boolean IS NULL OR p.featured = $2)
        "#,
    )
    .bind(category)
    .bind(featured)
    .fetch_one(pool)
    .await?;

    Ok(row.get(0))
}

/// Get a project by its slug
pub async fn get_project_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT p.id, p.name, p.slug, p.one_liner, p.description, p.logo_url, p.live_url,
               p.github_url, p.twitter_handle, p.discord_url, p.telegram_url, p.blog_url,
               p.solana_address, p.token_symbol, p.token_address, p.tvl, p.launch_date,
               p.status, p.featured, p.hunt_score, p.total_votes, p.created_at, p.updated_at,
               c.id AS category_id, c.name AS category_name, c.slug AS category_slug,
               c.color AS category_color,
               u.id AS owner_id, u.name AS owner_name, u.username AS owner_username
        FROM projects p
        LEFT JOIN categories c ON c.id = p.category_id
        LEFT JOIN users u ON u.id = p.owner_id
        WHERE p.slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(project_from_row))
}

/// Get a project by ID
pub async fn get_project_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Project>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT p.id, p.name, p.slug, p.one_liner, p.description, p.logo_url, p.live_url,
               p.github_url, p.twitter_handle, p.discord_url, p.telegram_url, p.blog_url,
               p.solana_address, p.token_symbol, p.token_address, p.tvl, p.launch_date,
               p.status, p.featured, p.hunt_score, p.total_votes, p.created_at, p.updated_at,
               c.id AS category_id, c.name AS category_name, c.slug AS category_slug,
               c.color AS category_color,
               u.id AS owner_id, u.name AS owner_name, u.username AS owner_username
        FROM projects p
        LEFT JOIN categories c ON c.id = p.category_id
        LEFT JOIN users u ON u.id = p.owner_id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(project_from_row))
}

/// Insert a project and return it with its joined references
///
/// Status, featured flag and the vote counters take their column defaults
/// (`LIVE`, false, 0). `launch_date` defaults to now when the body leaves
/// it out.
pub async fn insert_project(
    pool: &PgPool,
    slug: &str,
    body: &NewProject,
    owner_id: Option<Uuid>,
) -> Result<Project, sqlx::Error> {
    let id = Uuid::new_v4();
    let launch_date = body.launch_date.unwrap_or_else(Utc::now);

    sqlx::query(
        r#"
        INSERT INTO projects (id, name, slug, one_liner, description, logo_url, live_url,
                              github_url, twitter_handle, discord_url, telegram_url, blog_url,
                              solana_address, token_symbol, token_address, tvl, launch_date,
                              category_id, owner_id)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17,
                $18, $19)
        "#,
    )
    .bind(id)
    .bind(&body.name)
    .bind(slug)
    .bind(&body.one_liner)
    .bind(&body.description)
    .bind(&body.logo_url)
    .bind(&body.live_url)
    .bind(&body.github_url)
    .bind(&body.twitter_handle)
    .bind(&body.discord_url)
    .bind(&body.telegram_url)
    .bind(&body.blog_url)
    .bind(&body.solana_address)
    .bind(&body.token_symbol)
    .bind(&body.token_address)
    .bind(&body.tvl)
    .bind(launch_date)
    .bind(body.category_id)
    .bind(owner_id)
    .execute(pool)
    .await?;

    get_project_by_id(pool, id).await?.ok_or(sqlx::Error::RowNotFound)
}
