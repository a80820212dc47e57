//! Project directory API integration tests

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use serial_test::serial;
    use sqlx::PgPool;
    use uuid::Uuid;

    use dapphunt::backend::categories::db::insert_category;
    use dapphunt::backend::projects::db::insert_project;
    use dapphunt::shared::models::project::slugify;
    use dapphunt::shared::models::{NewProject, Project, ProjectListResponse, ProjectStatus};

    use crate::assert_contains;
    use crate::common::database::TestDatabase;
    use crate::common::mock_server::{test_server, test_server_without_db, unconfigured_oauth};

    fn submit_body(name: &str) -> serde_json::Value {
        serde_json::json!({
            "name": name,
            "description": "Swap aggregator",
            "live_url": "https://jup.ag",
            "solana_address": "JUP4Fb2cqiRUcaTHdrPC8h2gVZ1tYpJ8"
        })
    }

    async fn seed_project(
        pool: &PgPool,
        name: &str,
        category_id: Option<Uuid>,
        hunt_score: i32,
    ) -> Project {
        let body = NewProject {
            name: name.to_string(),
            description: format!("{} description", name),
            live_url: format!("https://{}.example", slugify(name)),
            solana_address: format!("{}111111111", slugify(name)),
            category_id,
            ..Default::default()
        };
        let project = insert_project(pool, &slugify(name), &body, None)
            .await
            .unwrap();
        sqlx::query("UPDATE projects SET hunt_score = $1 WHERE id = $2")
            .bind(hunt_score)
            .bind(project.id)
            .execute(pool)
            .await
            .unwrap();
        project
    }

    #[tokio::test]
    async fn test_listing_without_database_is_unavailable() {
        let server = test_server_without_db();

        let response = server.get("/api/projects").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Database not configured");
        assert_eq!(body["status"], 503);
    }

    #[tokio::test]
    async fn test_detail_without_database_is_unavailable() {
        let server = test_server_without_db();

        let response = server.get("/api/projects/jupiter").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_create_with_missing_field_names_it() {
        let server = test_server_without_db();

        let response = server
            .post("/api/projects")
            .json(&serde_json::json!({ "name": "Jupiter" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_contains!(body["error"].as_str().unwrap(), "description");
    }

    #[tokio::test]
    async fn test_create_with_symbol_only_name_is_rejected() {
        let server = test_server_without_db();

        let response = server.post("/api/projects").json(&submit_body("!!!")).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(
            body["error"],
            "Project name must contain at least one letter or digit"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_create_then_fetch_by_slug() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server
            .post("/api/projects")
            .json(&submit_body("Jupiter Exchange"))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);
        let created: Project = response.json();
        assert_eq!(created.slug, "jupiter-exchange");
        assert_eq!(created.status, ProjectStatus::Live);
        assert_eq!(created.hunt_score, 0);
        assert_eq!(created.total_votes, 0);
        assert!(!created.featured);

        let response = server.get("/api/projects/jupiter-exchange").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        let fetched: Project = response.json();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "Jupiter Exchange");
    }

    #[tokio::test]
    #[serial]
    async fn test_duplicate_name_conflicts() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let first = server
            .post("/api/projects")
            .json(&submit_body("Jupiter Exchange"))
            .await;
        assert_eq!(first.status_code(), StatusCode::CREATED);

        // Same slug even though the spelling differs
        let second = server
            .post("/api/projects")
            .json(&submit_body("jupiter EXCHANGE"))
            .await;
        assert_eq!(second.status_code(), StatusCode::CONFLICT);
        let body: serde_json::Value = second.json();
        assert_eq!(body["error"], "A project with this name already exists");
    }

    #[tokio::test]
    #[serial]
    async fn test_unknown_slug_is_not_found() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server.get("/api/projects/does-not-exist").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Project not found");
    }

    #[tokio::test]
    #[serial]
    async fn test_listing_sorts_filters_and_paginates() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let pool = db.pool();

        let defi = insert_category(pool, "DeFi", "defi", None, None).await.unwrap();
        seed_project(pool, "Alpha", Some(defi.id), 30).await;
        let beta = seed_project(pool, "Beta", Some(defi.id), 20).await;
        seed_project(pool, "Gamma", None, 10).await;
        sqlx::query("UPDATE projects SET featured = true WHERE id = $1")
            .bind(beta.id)
            .execute(pool)
            .await
            .unwrap();

        let server = test_server(Some(pool.clone()), unconfigured_oauth());

        // Default ordering is hunt score, descending
        let body: ProjectListResponse = server.get("/api/projects").await.json();
        assert_eq!(body.pagination.total, 3);
        let names: Vec<&str> = body.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);

        // Ascending flips it
        let body: ProjectListResponse = server
            .get("/api/projects")
            .add_query_param("sortBy", "huntScore")
            .add_query_param("order", "asc")
            .await
            .json();
        let names: Vec<&str> = body.projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Gamma", "Beta", "Alpha"]);

        // Category filter narrows by slug and embeds the reference
        let body: ProjectListResponse = server
            .get("/api/projects")
            .add_query_param("category", "defi")
            .await
            .json();
        assert_eq!(body.pagination.total, 2);
        assert!(body
            .projects
            .iter()
            .all(|p| p.category.as_ref().map(|c| c.slug.as_str()) == Some("defi")));

        // Featured filter only engages on the literal "true"
        let body: ProjectListResponse = server
            .get("/api/projects")
            .add_query_param("featured", "true")
            .await
            .json();
        assert_eq!(body.pagination.total, 1);
        assert_eq!(body.projects[0].name, "Beta");

        let body: ProjectListResponse = server
            .get("/api/projects")
            .add_query_param("featured", "nope")
            .await
            .json();
        assert_eq!(body.pagination.total, 3);

        // Pagination window
        let body: ProjectListResponse = server
            .get("/api/projects")
            .add_query_param("limit", 2)
            .await
            .json();
        assert_eq!(body.projects.len(), 2);
        assert!(body.pagination.has_more);

        let body: ProjectListResponse = server
            .get("/api/projects")
            .add_query_param("limit", 2)
            .add_query_param("offset", 2)
            .await
            .json();
        assert_eq!(body.projects.len(), 1);
        assert!(!body.pagination.has_more);
    }

    #[tokio::test]
    #[serial]
    async fn test_draft_projects_stay_out_of_the_directory() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let pool = db.pool();

        let project = seed_project(pool, "Hidden", None, 0).await;
        sqlx::query("UPDATE projects SET status = 'DRAFT' WHERE id = $1")
            .bind(project.id)
            .execute(pool)
            .await
            .unwrap();

        let server = test_server(Some(pool.clone()), unconfigured_oauth());

        let body: ProjectListResponse = server.get("/api/projects").await.json();
        assert_eq!(body.pagination.total, 0);

        // The detail route still resolves drafts by slug
        let response = server.get("/api/projects/hidden").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }
}
