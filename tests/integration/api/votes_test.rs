//! Voting API integration tests
//!
//! The toggle semantics live here: same direction removes, opposite
//! direction switches, and every change recomputes the project's
//! counters from the votes table.

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use sqlx::PgPool;
    use uuid::Uuid;

    use dapphunt::backend::projects::db::insert_project;
    use dapphunt::shared::models::{NewProject, Project, VoteKind, VoteResponse, VoteStats};

    use crate::common::auth_helpers::{create_unique_test_user, TestUser};
    use crate::common::database::TestDatabase;
    use crate::common::mock_server::{test_server, test_server_without_db, unconfigured_oauth};

    async fn seed_project(pool: &PgPool) -> Project {
        let body = NewProject {
            name: "Jupiter".to_string(),
            description: "Swap aggregator".to_string(),
            live_url: "https://jup.ag".to_string(),
            solana_address: "JUP4Fb2cqiRUcaTHdrPC8h2gVZ1tYpJ8".to_string(),
            ..Default::default()
        };
        insert_project(pool, "jupiter", &body, None).await.unwrap()
    }

    fn vote_body(user: &TestUser, direction: &str) -> serde_json::Value {
        serde_json::json!({ "user_id": user.id, "vote_type": direction })
    }

    #[tokio::test]
    async fn test_vote_with_missing_fields_is_rejected() {
        let server = test_server_without_db();

        let response = server
            .post(&format!("/api/projects/{}/vote", Uuid::new_v4()))
            .json(&serde_json::json!({}))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Project ID, vote type, and user ID are required");
    }

    #[tokio::test]
    async fn test_vote_with_unknown_direction_is_rejected() {
        let server = test_server_without_db();

        let response = server
            .post(&format!("/api/projects/{}/vote", Uuid::new_v4()))
            .json(&serde_json::json!({ "user_id": Uuid::new_v4(), "vote_type": "sideways" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Vote type must be either \"up\" or \"down\"");
    }

    #[tokio::test]
    async fn test_vote_without_session_is_unauthorized() {
        let server = test_server_without_db();

        let response = server
            .post(&format!("/api/projects/{}/vote", Uuid::new_v4()))
            .json(&serde_json::json!({ "user_id": Uuid::new_v4(), "vote_type": "up" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "You must be signed in to vote");
    }

    #[tokio::test]
    async fn test_vote_stats_without_database_is_unavailable() {
        let server = test_server_without_db();

        let response = server
            .get(&format!("/api/projects/{}/vote", Uuid::new_v4()))
            .await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    #[serial]
    async fn test_vote_toggle_and_switch_recompute_the_score() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let project = seed_project(db.pool()).await;
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());
        let vote_url = format!("/api/projects/{}/vote", project.id);

        // First upvote
        let response = server
            .post(&vote_url)
            .authorization_bearer(&user.token)
            .json(&vote_body(&user, "up"))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: VoteResponse = response.json();
        assert_eq!(body.action, "created");
        assert_eq!(body.message, "Vote recorded");
        assert_eq!(body.vote_type, Some(VoteKind::Up));
        assert_eq!(body.up_votes, Some(1));
        assert_eq!(body.down_votes, Some(0));
        assert_eq!(body.new_vote_count, 1);
        let scored = body.project.unwrap();
        assert_eq!(scored.hunt_score, 10);
        assert_eq!(scored.total_votes, 1);

        // Same direction again removes the vote; the optional fields drop out
        let response = server
            .post(&vote_url)
            .authorization_bearer(&user.token)
            .json(&vote_body(&user, "up"))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["action"], "removed");
        assert_eq!(body["message"], "Vote removed");
        assert_eq!(body["new_vote_count"], 0);
        assert!(body.get("vote_type").is_none());
        assert!(body.get("up_votes").is_none());
        assert!(body.get("project").is_none());

        // Downvote, then switch back up
        let response = server
            .post(&vote_url)
            .authorization_bearer(&user.token)
            .json(&vote_body(&user, "down"))
            .await;
        let body: VoteResponse = response.json();
        assert_eq!(body.action, "created");
        assert_eq!(body.vote_type, Some(VoteKind::Down));
        // Downvotes do not count toward total_votes, and the score floors at 0
        assert_eq!(body.new_vote_count, 0);
        assert_eq!(body.project.unwrap().hunt_score, 0);

        let response = server
            .post(&vote_url)
            .authorization_bearer(&user.token)
            .json(&vote_body(&user, "up"))
            .await;
        let body: VoteResponse = response.json();
        assert_eq!(body.action, "updated");
        assert_eq!(body.message, "Vote updated");
        assert_eq!(body.vote_type, Some(VoteKind::Up));
        assert_eq!(body.up_votes, Some(1));
        assert_eq!(body.down_votes, Some(0));
        assert_eq!(body.new_vote_count, 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_voting_as_someone_else_is_forbidden() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let voter = create_unique_test_user(db.pool()).await.unwrap();
        let other = create_unique_test_user(db.pool()).await.unwrap();
        let project = seed_project(db.pool()).await;
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server
            .post(&format!("/api/projects/{}/vote", project.id))
            .authorization_bearer(&voter.token)
            .json(&vote_body(&other, "up"))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "You can only vote as yourself");
    }

    #[tokio::test]
    #[serial]
    async fn test_voting_on_a_missing_project_is_not_found() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server
            .post(&format!("/api/projects/{}/vote", Uuid::new_v4()))
            .authorization_bearer(&user.token)
            .json(&vote_body(&user, "up"))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Project not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_vote_stats_report_the_callers_own_vote() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let alice = create_unique_test_user(db.pool()).await.unwrap();
        let bob = create_unique_test_user(db.pool()).await.unwrap();
        let project = seed_project(db.pool()).await;
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());
        let vote_url = format!("/api/projects/{}/vote", project.id);

        server
            .post(&vote_url)
            .authorization_bearer(&alice.token)
            .json(&vote_body(&alice, "up"))
            .await
            .assert_status(StatusCode::OK);
        server
            .post(&vote_url)
            .authorization_bearer(&bob.token)
            .json(&vote_body(&bob, "down"))
            .await
            .assert_status(StatusCode::OK);

        let stats: VoteStats = server
            .get(&vote_url)
            .add_query_param("user_id", alice.id)
            .await
            .json();
        assert_eq!(stats.up_votes, 1);
        assert_eq!(stats.down_votes, 1);
        assert_eq!(stats.user_vote, Some(VoteKind::Up));

        // Without a user_id the caller's vote is unknown
        let stats: VoteStats = server.get(&vote_url).await.json();
        assert_eq!(stats.user_vote, None);
    }
}
