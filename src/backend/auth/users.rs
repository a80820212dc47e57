/**
 * User Model and Database Operations
 *
 * This module handles user rows, identity-provider account links, and the
 * find-or-create flow run by the OAuth callback.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::shared::models::{Role, UserPublic, UserStats};

/// User struct representing a row in the users table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Account email (unique)
    pub email: String,
    /// Display name from the identity provider
    pub name: Option<String>,
    /// Unique handle, auto-generated on first sign-in
    pub username: Option<String>,
    /// Avatar URL from the identity provider
    pub image: Option<String>,
    /// Role as stored in the database ("USER" or "ADMIN")
    pub role: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Public view of this user, safe to return from any endpoint
    pub fn to_public(&self) -> UserPublic {
        UserPublic {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            username: self.username.clone(),
            image: self.image.clone(),
            role: Role::from_str(&self.role).unwrap_or_default(),
            created_at: self.created_at,
        }
    }

    /// Whether this user can review submissions
    pub fn is_admin(&self) -> bool {
        Role::from_str(&self.role).unwrap_or_default().is_admin()
    }
}

/// Create a new user
///
/// The role column keeps its database default of `USER`.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Account email
/// * `name` - Display name from the identity provider
/// * `image` - Avatar URL from the identity provider
/// * `username` - Generated unique handle
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &PgPool,
    email: String,
    name: Option<String>,
    image: Option<String>,
    username: Option<String>,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, name, username, image, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, email, name, username, image, role, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&email)
    .bind(&name)
    .bind(&username)
    .bind(&image)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(pool: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, username, image, role, created_at, updated_at
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by username
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `username` - Username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, username, image, role, created_at, updated_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, name, username, image, role, created_at, updated_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get the user linked to an identity-provider account
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `provider` - Provider name (e.g. "google")
/// * `provider_account_id` - Stable account ID assigned by the provider
///
/// # Returns
/// User or None if no account link exists
pub async fn get_user_by_account(
    pool: &PgPool,
    provider: &str,
    provider_account_id: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.email, u.name, u.username, u.image, u.role, u.created_at, u.updated_at
        FROM users u
        JOIN accounts a ON a.user_id = u.id
        WHERE a.provider = $1 AND a.provider_account_id = $2
        "#,
    )
    .bind(provider)
    .bind(provider_account_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Link an identity-provider account to a user
///
/// Idempotent: replaying the same (provider, account) pair is a no-op.
pub async fn link_account(
    pool: &PgPool,
    user_id: Uuid,
    provider: &str,
    provider_account_id: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO accounts (id, user_id, provider, provider_account_id, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (provider, provider_account_id) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(provider)
    .bind(provider_account_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// Resolve the user for an OAuth sign-in, creating one if needed
///
/// # Resolution Order
///
/// 1. A user already linked to this (provider, account) pair
/// 2. A user with the same email - the account is linked to them
/// 3. A brand new user with a generated username, plus the account link
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `provider` - Provider name (e.g. "google")
/// * `provider_account_id` - Stable account ID from the provider
/// * `email` - Email reported by the provider
/// * `name` - Display name reported by the provider
/// * `image` - Avatar URL reported by the provider
pub async fn find_or_create_oauth_user(
    pool: &PgPool,
    provider: &str,
    provider_account_id: &str,
    email: &str,
    name: Option<String>,
    image: Option<String>,
) -> Result<User, sqlx::Error> {
    if let Some(user) = get_user_by_account(pool, provider, provider_account_id).await? {
        return Ok(user);
    }

    if let Some(user) = get_user_by_email(pool, email).await? {
        link_account(pool, user.id, provider, provider_account_id).await?;
        tracing::info!("Linked {} account to existing user {}", provider, user.id);
        return Ok(user);
    }

    let username = generate_username(pool, email).await?;
    let user = create_user(pool, email.to_string(), name, image, Some(username)).await?;
    link_account(pool, user.id, provider, provider_account_id).await?;
    tracing::info!("Created user {} from {} sign-in", user.id, provider);

    Ok(user)
}

/// Generate a unique username from an email address
///
/// Uses the local part of the email, stripped to alphanumerics and
/// underscores, then appends a counter until the handle is free.
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - Email to derive the handle from
pub async fn generate_username(pool: &PgPool, email: &str) -> Result<String, sqlx::Error> {
    let base = username_base(email);

    let mut candidate = base.clone();
    let mut counter = 1u32;
    while get_user_by_username(pool, &candidate).await?.is_some() {
        candidate = format!("{}{}", base, counter);
        counter += 1;
    }

    Ok(candidate)
}

/// Derive the username base from an email's local part
fn username_base(email: &str) -> String {
    let base: String = email
        .split('@')
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    let base = base.to_lowercase();

    if base.is_empty() {
        "user".to_string()
    } else {
        base
    }
}

/// Activity counters for the profile view
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user_id` - User ID
pub async fn get_user_stats(pool: &PgPool, user_id: Uuid) -> Result<UserStats, sqlx::Error> {
    let row = sqlx::query(r#"SELECT COUNT(*) FROM votes WHERE user_id = $1"#)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    let votes_cast: i64 = row.get(0);

    let row = sqlx::query(r#"SELECT COUNT(*) FROM submissions WHERE submitted_by = $1"#)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    let submissions_made: i64 = row.get(0);

    Ok(UserStats {
        votes_cast,
        submissions_made,
    })
}
