//! Submission API integration tests
//!
//! Covers the intake form, the review queue, and the admin approve/reject
//! decisions including the submission-to-project conversion.

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serial_test::serial;
    use uuid::Uuid;

    use dapphunt::shared::models::{
        ApproveResponse, Project, ProjectStatus, SubmissionListResponse, SubmissionStatus,
        SubmitResponse,
    };

    use crate::assert_contains;
    use crate::common::auth_helpers::{create_admin_user, create_unique_test_user, TestUser};
    use crate::common::database::TestDatabase;
    use crate::common::mock_server::{test_server, test_server_without_db, unconfigured_oauth};

    fn application(name: &str) -> serde_json::Value {
        serde_json::json!({
            "project_name": name,
            "description": "Fully on-chain limit orders",
            "live_url": "https://phoenix.trade",
            "solana_address": "Pho3n1xTrade111",
            "one_liner": "On-chain order book",
            "category": "DeFi Tools",
            "twitter": "phoenixtrade"
        })
    }

    async fn file_submission(server: &TestServer, user: &TestUser, name: &str) -> SubmitResponse {
        let response = server
            .post("/api/submissions")
            .authorization_bearer(&user.token)
            .json(&application(name))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
        response.json()
    }

    #[tokio::test]
    async fn test_submit_without_session_is_unauthorized() {
        let server = test_server_without_db();

        let response = server
            .post("/api/submissions")
            .json(&application("Phoenix"))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "You must be signed in to submit a project");
    }

    #[tokio::test]
    async fn test_submit_with_token_but_no_database_is_unavailable() {
        let server = test_server_without_db();

        let response = server
            .post("/api/submissions")
            .authorization_bearer("tok-123")
            .json(&application("Phoenix"))
            .await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_queue_without_session_is_unauthorized() {
        let server = test_server_without_db();

        let response = server.get("/api/submissions").await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    #[serial]
    async fn test_submit_returns_a_pending_receipt() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let receipt = file_submission(&server, &user, "Phoenix").await;

        assert_eq!(receipt.message, "Submission received successfully!");
        assert_eq!(receipt.submission.project_name, "Phoenix");
        assert_eq!(receipt.submission.status, SubmissionStatus::Pending);

        // The submitter's activity counter moves
        let stats: serde_json::Value = server
            .get("/api/auth/me/stats")
            .authorization_bearer(&user.token)
            .await
            .json();
        assert_eq!(stats["submissions_made"], 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_submit_with_missing_field_names_it() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let mut body = application("Phoenix");
        body["description"] = serde_json::json!("");
        let response = server
            .post("/api/submissions")
            .authorization_bearer(&user.token)
            .json(&body)
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let error: serde_json::Value = response.json();
        assert_contains!(error["error"].as_str().unwrap(), "description");
    }

    #[tokio::test]
    #[serial]
    async fn test_queue_filters_by_status() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        file_submission(&server, &user, "Phoenix").await;
        file_submission(&server, &user, "Tensor").await;

        let queue: SubmissionListResponse = server
            .get("/api/submissions")
            .authorization_bearer(&user.token)
            .await
            .json();
        assert_eq!(queue.pagination.total, 2);

        let pending: SubmissionListResponse = server
            .get("/api/submissions")
            .authorization_bearer(&user.token)
            .add_query_param("status", "PENDING")
            .await
            .json();
        assert_eq!(pending.pagination.total, 2);

        let approved: SubmissionListResponse = server
            .get("/api/submissions")
            .authorization_bearer(&user.token)
            .add_query_param("status", "APPROVED")
            .await
            .json();
        assert_eq!(approved.pagination.total, 0);

        // Unknown statuses are ignored rather than matched
        let unknown: SubmissionListResponse = server
            .get("/api/submissions")
            .authorization_bearer(&user.token)
            .add_query_param("status", "ON_FIRE")
            .await
            .json();
        assert_eq!(unknown.pagination.total, 2);
    }

    #[tokio::test]
    #[serial]
    async fn test_approve_converts_the_submission_into_a_live_project() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let submitter = create_unique_test_user(db.pool()).await.unwrap();
        let admin = create_admin_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let receipt = file_submission(&server, &submitter, "Phoenix").await;

        let response = server
            .post(&format!("/api/submissions/{}/approve", receipt.submission.id))
            .authorization_bearer(&admin.token)
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let approved: ApproveResponse = response.json();
        assert_eq!(approved.message, "Submission approved successfully");
        assert_eq!(approved.project.name, "Phoenix");
        assert_eq!(approved.project.slug, "phoenix");
        assert_eq!(approved.project.status, ProjectStatus::Live);

        // The project is now in the directory, owned by the submitter and
        // filed under a category created from the submitted name
        let project: Project = server.get("/api/projects/phoenix").await.json();
        assert_eq!(project.owner.as_ref().map(|o| o.id), Some(submitter.id));
        assert_eq!(
            project.category.as_ref().map(|c| c.name.as_str()),
            Some("DeFi Tools")
        );

        // The queue reflects the decision
        let approved_queue: SubmissionListResponse = server
            .get("/api/submissions")
            .authorization_bearer(&admin.token)
            .add_query_param("status", "APPROVED")
            .await
            .json();
        assert_eq!(approved_queue.pagination.total, 1);

        // A second decision on the same submission is rejected
        let response = server
            .post(&format!("/api/submissions/{}/approve", receipt.submission.id))
            .authorization_bearer(&admin.token)
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Submission already processed");
    }

    #[tokio::test]
    #[serial]
    async fn test_approve_requires_the_admin_role() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let user = create_unique_test_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let receipt = file_submission(&server, &user, "Phoenix").await;

        let response = server
            .post(&format!("/api/submissions/{}/approve", receipt.submission.id))
            .authorization_bearer(&user.token)
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Admin access required");
    }

    #[tokio::test]
    #[serial]
    async fn test_approve_of_an_unknown_submission_is_not_found() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let admin = create_admin_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server
            .post(&format!("/api/submissions/{}/approve", Uuid::new_v4()))
            .authorization_bearer(&admin.token)
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Submission not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_reject_records_the_reason() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let submitter = create_unique_test_user(db.pool()).await.unwrap();
        let admin = create_admin_user(db.pool()).await.unwrap();
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let receipt = file_submission(&server, &submitter, "Phoenix").await;

        let response = server
            .post(&format!("/api/submissions/{}/reject", receipt.submission.id))
            .authorization_bearer(&admin.token)
            .json(&serde_json::json!({ "reason": "Dead link" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], "Submission rejected");

        let rejected: SubmissionListResponse = server
            .get("/api/submissions")
            .authorization_bearer(&admin.token)
            .add_query_param("status", "REJECTED")
            .await
            .json();
        assert_eq!(rejected.pagination.total, 1);
        assert_eq!(
            rejected.submissions[0].review_notes.as_deref(),
            Some("Dead link")
        );

        // Nothing reached the directory
        let response = server.get("/api/projects/phoenix").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
