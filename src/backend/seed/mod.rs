//! Database Seeding
//!
//! One-shot routine behind the `dapphunt-seed` binary. Wipes every table,
//! then inserts the two fixed accounts (demo and admin), the six default
//! categories, and a pinned welcome thread. Running it twice leaves the
//! same rows.

use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::users::create_user;
use crate::backend::categories;
use crate::backend::forum::DEMO_USER_EMAIL;

/// Account with the ADMIN role for the review queue.
pub const ADMIN_USER_EMAIL: &str = "admin@dapphunt.com";

/// The default taxonomy: (name, slug, description, color).
const DEFAULT_CATEGORIES: [(&str, &str, &str, &str); 6] = [
    ("DeFi", "defi", "Decentralized Finance applications", "#10B981"),
    ("NFTs", "nfts", "Non-Fungible Token platforms", "#8B5CF6"),
    ("Gaming", "gaming", "Blockchain gaming and metaverse", "#F59E0B"),
    (
        "Infrastructure",
        "infrastructure",
        "Developer tools and infrastructure",
        "#3B82F6",
    ),
    ("Social", "social", "Social platforms and communication", "#EF4444"),
    ("Marketplace", "marketplace", "Trading and marketplace platforms", "#06B6D4"),
];

/// Wipe and reseed the database
pub async fn run_seed(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Starting database seed");

    clear_all(pool).await?;
    tracing::info!("Cleared existing data");

    let demo = create_user(
        pool,
        DEMO_USER_EMAIL.to_string(),
        Some("Demo User".to_string()),
        None,
        Some("demo".to_string()),
    )
    .await?;
    tracing::info!("Created demo user: {}", demo.email);

    let admin = create_user(
        pool,
        ADMIN_USER_EMAIL.to_string(),
        Some("Admin".to_string()),
        None,
        Some("admin".to_string()),
    )
    .await?;
    promote_to_admin(pool, admin.id).await?;
    tracing::info!("Created admin user: {}", admin.email);

    for (name, slug, description, color) in DEFAULT_CATEGORIES {
        categories::db::insert_category(pool, name, slug, Some(description), Some(color)).await?;
    }
    tracing::info!("Created {} categories", DEFAULT_CATEGORIES.len());

    insert_welcome_thread(pool, demo.id).await?;
    tracing::info!("Created welcome forum thread");

    tracing::info!("Database seeded successfully");
    Ok(())
}

/// Delete every row, children before parents
async fn clear_all(pool: &PgPool) -> Result<(), sqlx::Error> {
    for table in [
        "votes",
        "projects",
        "submissions",
        "forum_posts",
        "forum_threads",
        "sessions",
        "accounts",
        "users",
        "categories",
    ] {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

async fn promote_to_admin(pool: &PgPool, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE users SET role = 'ADMIN', updated_at = now() WHERE id = $1")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(())
}

async fn insert_welcome_thread(pool: &PgPool, author_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO forum_threads (id, title, content, category, is_pinned, is_hot, author_id)
        VALUES ($1, $2, $3, $4, true, true, $5)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind("Welcome to DappHunt! 🚀")
    .bind("Share your amazing Solana dapps with the community!")
    .bind("General")
    .bind(author_id)
    .execute(pool)
    .await?;
    Ok(())
}
