//! Forum API integration tests
//!
//! Threads fall back to the demo account when opened without a session;
//! replies always need one. Listing keeps pinned threads first, then hot
//! ones, then the requested sort.

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::header::AUTHORIZATION;
    use axum::http::{HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serial_test::serial;
    use uuid::Uuid;

    use dapphunt::shared::models::{ForumPost, ForumThread, ThreadDetail, ThreadListResponse};

    use crate::assert_contains;
    use crate::common::auth_helpers::{
        auth_header, create_demo_user, create_unique_test_user, TestUser,
    };
    use crate::common::database::TestDatabase;
    use crate::common::mock_server::{test_server, test_server_without_db, unconfigured_oauth};

    fn thread_body(title: &str, category: &str) -> serde_json::Value {
        serde_json::json!({
            "title": title,
            "content": "Voted yesterday, gone today.",
            "category": category
        })
    }

    async fn open_thread(server: &TestServer, user: &TestUser, title: &str) -> ForumThread {
        let response = server
            .post("/api/forum/threads")
            .authorization_bearer(&user.token)
            .json(&thread_body(title, "General"))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        response.json()
    }

    #[tokio::test]
    async fn test_listing_without_database_is_unavailable() {
        let server = test_server_without_db();

        let response = server.get("/api/forum/threads").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_open_thread_with_missing_field_names_it() {
        let server = test_server_without_db();

        let response = server
            .post("/api/forum/threads")
            .json(&serde_json::json!({ "title": "Help", "category": "General" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_contains!(body["error"].as_str().unwrap(), "content");
    }

    #[tokio::test]
    async fn test_open_thread_with_valid_body_needs_the_database() {
        let server = test_server_without_db();

        let response = server
            .post("/api/forum/threads")
            .json(&thread_body("Help", "General"))
            .await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_reply_without_session_is_unauthorized() {
        let server = test_server_without_db();

        let response = server
            .post(&format!("/api/forum/threads/{}/posts", Uuid::new_v4()))
            .json(&serde_json::json!({ "content": "gm" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "You must be signed in to reply");
    }

    #[tokio::test]
    #[serial]
    async fn test_thread_opened_with_a_session_belongs_to_that_user() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let thread = open_thread(&server, &user, "Why did my vote disappear?").await;
        assert_eq!(thread.author_id, user.id);
        assert!(!thread.is_pinned);
        assert!(!thread.is_hot);

        let detail: ThreadDetail = server
            .get(&format!("/api/forum/threads/{}", thread.id))
            .await
            .json();
        assert_eq!(detail.title, "Why did my vote disappear?");
        assert_eq!(detail.author, "Test User");
        assert!(detail.posts.is_empty());
    }

    #[tokio::test]
    #[serial]
    async fn test_anonymous_thread_falls_back_to_the_demo_account() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let demo_id = create_demo_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server
            .post("/api/forum/threads")
            .json(&thread_body("First post", "General"))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let thread: ForumThread = response.json();
        assert_eq!(thread.author_id, demo_id);
    }

    #[tokio::test]
    #[serial]
    async fn test_anonymous_thread_without_a_demo_account_fails() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server
            .post("/api/forum/threads")
            .json(&thread_body("First post", "General"))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "User not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_replies_land_in_the_thread() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let opener = create_unique_test_user(db.pool()).await.unwrap();
        let replier = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let thread = open_thread(&server, &opener, "Wallet integration tips?").await;

        let response = server
            .post(&format!("/api/forum/threads/{}/posts", thread.id))
            .add_header(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_header(&replier.token)).unwrap(),
            )
            .json(&serde_json::json!({ "content": "Use wallet-adapter." }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        let post: ForumPost = response.json();
        assert_eq!(post.thread_id, thread.id);
        assert_eq!(post.author_id, replier.id);

        let detail: ThreadDetail = server
            .get(&format!("/api/forum/threads/{}", thread.id))
            .await
            .json();
        assert_eq!(detail.posts.len(), 1);
        assert_eq!(detail.posts[0].content, "Use wallet-adapter.");

        let listing: ThreadListResponse = server.get("/api/forum/threads").await.json();
        assert_eq!(listing.threads[0].replies, 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_reply_to_a_missing_thread_is_not_found() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server
            .post(&format!("/api/forum/threads/{}/posts", Uuid::new_v4()))
            .authorization_bearer(&user.token)
            .json(&serde_json::json!({ "content": "gm" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Thread not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_reply_is_rejected() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let thread = open_thread(&server, &user, "Moderation questions").await;

        let response = server
            .post(&format!("/api/forum/threads/{}/posts", thread.id))
            .authorization_bearer(&user.token)
            .json(&serde_json::json!({ "content": "   " }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_contains!(body["error"].as_str().unwrap(), "content");
    }

    #[tokio::test]
    #[serial]
    async fn test_listing_keeps_pinned_and_hot_threads_first() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        open_thread(&server, &user, "Ordinary").await;
        let pinned = open_thread(&server, &user, "Pinned").await;
        let hot = open_thread(&server, &user, "Hot").await;
        sqlx::query("UPDATE forum_threads SET is_pinned = true WHERE id = $1")
            .bind(pinned.id)
            .execute(db.pool())
            .await
            .unwrap();
        sqlx::query("UPDATE forum_threads SET is_hot = true WHERE id = $1")
            .bind(hot.id)
            .execute(db.pool())
            .await
            .unwrap();

        let listing: ThreadListResponse = server.get("/api/forum/threads").await.json();
        let titles: Vec<&str> = listing.threads.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Pinned", "Hot", "Ordinary"]);
        assert!(listing.threads[0].is_pinned);
        assert!(listing.threads[1].is_hot);
    }

    #[tokio::test]
    #[serial]
    async fn test_listing_filters_by_category() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        for (title, category) in [
            ("Yield strategies", "DeFi"),
            ("Mint schedule", "NFTs"),
            ("Site feedback", "General"),
        ] {
            let response = server
                .post("/api/forum/threads")
                .authorization_bearer(&user.token)
                .json(&thread_body(title, category))
                .await;
            assert_eq!(response.status_code(), StatusCode::CREATED);
        }

        let listing: ThreadListResponse = server
            .get("/api/forum/threads")
            .add_query_param("category", "DeFi")
            .await
            .json();
        assert_eq!(listing.pagination.total, 1);
        assert_eq!(listing.threads[0].title, "Yield strategies");
        assert_eq!(listing.threads[0].category, "DeFi");
    }
}
