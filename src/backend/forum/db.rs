//! Database operations for forum threads and posts

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::shared::models::{ForumPost, ForumThread, NewThread, PostView, ThreadDetail, ThreadSummary};

/// Display name for an author: name, else username, else "Anonymous"
fn display_author(name: Option<String>, username: Option<String>) -> String {
    name.or(username).unwrap_or_else(|| "Anonymous".to_string())
}

/// Map a client sort key to a whitelisted ORDER BY expression
///
/// `replies` is the aggregate alias from the listing query.
fn sort_column(sort_by: &str) -> &'static str {
    match sort_by {
        "createdAt" => "t.created_at",
        "replyCount" => "replies",
        _ => "t.updated_at",
    }
}

fn sort_direction(order: &str) -> &'static str {
    if order.eq_ignore_ascii_case("asc") {
        "ASC"
    } else {
        "DESC"
    }
}

fn thread_from_row(row: &PgRow) -> ForumThread {
    ForumThread {
        id: row.get("id"),
        title: row.get("title"),
        content: row.get("content"),
        category: row.get("category"),
        is_pinned: row.get("is_pinned"),
        is_hot: row.get("is_hot"),
        author_id: row.get("author_id"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Threads for the forum index, pinned first, then hot, then the sort key
pub async fn list_thread_summaries(
    pool: &PgPool,
    category: Option<&str>,
    sort_by: &str,
    order: &str,
    limit: i64,
    offset: i64,
) -> Result<Vec<ThreadSummary>, sqlx::Error> {
    let query = format!(
        r#"
        SELECT t.id, t.title, t.category, t.is_pinned, t.is_hot,
               t.created_at, t.updated_at,
               u.name AS author_name, u.username AS author_username,
               COUNT(p.id) AS replies
        FROM forum_threads t
        JOIN users u ON u.id = t.author_id
        LEFT JOIN forum_posts p ON p.thread_id = t.id
        WHERE ($1::text IS NULL OR t.category = $1)
        GROUP BY t.id, u.id
        ORDER BY t.is_pinned DESC, t.is_hot DESC, {} {}
        LIMIT $2 OFFSET $3
        "#,
        sort_column(sort_by),
        sort_direction(order)
    );

    let rows = sqlx::query(&query)
        .bind(category)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .map(|row| ThreadSummary {
            id: row.get("id"),
            title: row.get("title"),
            author: display_author(row.get("author_name"), row.get("author_username")),
            replies: row.get("replies"),
            last_activity: row.get::<DateTime<Utc>, _>("updated_at"),
            is_hot: row.get("is_hot"),
            category: row.get("category"),
            is_pinned: row.get("is_pinned"),
        })
        .collect())
}

/// Total thread count for the same filter as [`list_thread_summaries`]
pub async fn count_threads(pool: &PgPool, category: Option<&str>) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) FROM forum_threads
        WHERE ($1::text IS NULL OR category = $1)
        "#,
    )
    .bind(category)
    .fetch_one(pool)
    .await?;

    Ok(row.get(0))
}

/// One thread with its replies in posting order, or None
pub async fn get_thread_detail(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<ThreadDetail>, sqlx::Error> {
    let thread = sqlx::query(
        r#"
        SELECT t.id, t.title, t.content, t.category, t.is_pinned, t.is_hot,
               t.created_at, t.updated_at,
               u.name AS author_name, u.username AS author_username
        FROM forum_threads t
        JOIN users u ON u.id = t.author_id
        WHERE t.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let thread = match thread {
        Some(thread) => thread,
        None => return Ok(None),
    };

    let posts = sqlx::query(
        r#"
        SELECT p.id, p.content, p.created_at,
               u.name AS author_name, u.username AS author_username
        FROM forum_posts p
        JOIN users u ON u.id = p.author_id
        WHERE p.thread_id = $1
        ORDER BY p.created_at ASC
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(ThreadDetail {
        id: thread.get("id"),
        title: thread.get("title"),
        content: thread.get("content"),
        category: thread.get("category"),
        author: display_author(thread.get("author_name"), thread.get("author_username")),
        is_pinned: thread.get("is_pinned"),
        is_hot: thread.get("is_hot"),
        created_at: thread.get("created_at"),
        updated_at: thread.get("updated_at"),
        posts: posts
            .iter()
            .map(|row| PostView {
                id: row.get("id"),
                author: display_author(row.get("author_name"), row.get("author_username")),
                content: row.get("content"),
                created_at: row.get("created_at"),
            })
            .collect(),
    }))
}

pub async fn thread_exists(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM forum_threads WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;
    Ok(row.get(0))
}

/// Open a thread
pub async fn insert_thread(
    pool: &PgPool,
    author_id: Uuid,
    body: &NewThread,
) -> Result<ForumThread, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO forum_threads (id, title, content, category, author_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, title, content, category, is_pinned, is_hot, author_id,
                  created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&body.title)
    .bind(&body.content)
    .bind(&body.category)
    .bind(author_id)
    .fetch_one(pool)
    .await?;

    Ok(thread_from_row(&row))
}

/// Add a reply and bump the thread's `updated_at` so it rises in listings
pub async fn insert_post(
    pool: &PgPool,
    thread_id: Uuid,
    author_id: Uuid,
    content: &str,
) -> Result<ForumPost, sqlx::Error> {
    let row = sqlx::query(
        r#"
        INSERT INTO forum_posts (id, thread_id, author_id, content)
        VALUES ($1, $2, $3, $4)
        RETURNING id, thread_id, author_id, content, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(thread_id)
    .bind(author_id)
    .bind(content)
    .fetch_one(pool)
    .await?;

    sqlx::query("UPDATE forum_threads SET updated_at = now() WHERE id = $1")
        .bind(thread_id)
        .execute(pool)
        .await?;

    Ok(ForumPost {
        id: row.get("id"),
        thread_id: row.get("thread_id"),
        author_id: row.get("author_id"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    })
}
