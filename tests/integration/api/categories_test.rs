//! Category API integration tests

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use serial_test::serial;

    use dapphunt::backend::categories::db::{category_slug, insert_category};
    use dapphunt::backend::projects::db::insert_project;
    use dapphunt::shared::models::{CategoryListResponse, NewProject};

    use crate::common::database::TestDatabase;
    use crate::common::mock_server::{test_server, test_server_without_db, unconfigured_oauth};

    #[tokio::test]
    async fn test_categories_without_database_is_unavailable() {
        let server = test_server_without_db();

        let response = server.get("/api/categories").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "Database not configured");
    }

    #[tokio::test]
    #[serial]
    async fn test_categories_report_live_project_counts() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let pool = db.pool();

        let defi = insert_category(pool, "DeFi", &category_slug("DeFi"), None, Some("#10B981"))
            .await
            .unwrap();
        let gaming = insert_category(pool, "Gaming", &category_slug("Gaming"), None, None)
            .await
            .unwrap();

        let live = NewProject {
            name: "Jupiter".to_string(),
            description: "Swap aggregator".to_string(),
            live_url: "https://jup.ag".to_string(),
            solana_address: "JUP4Fb2cqiRUcaTHdrPC8h2gVZ1tYpJ8".to_string(),
            category_id: Some(defi.id),
            ..Default::default()
        };
        insert_project(pool, "jupiter", &live, None).await.unwrap();

        let drafted = NewProject {
            name: "Side Quest".to_string(),
            description: "Unreleased game".to_string(),
            live_url: "https://sidequest.example".to_string(),
            solana_address: "S1deQuest".to_string(),
            category_id: Some(gaming.id),
            ..Default::default()
        };
        let project = insert_project(pool, "side-quest", &drafted, None).await.unwrap();
        sqlx::query("UPDATE projects SET status = 'DRAFT' WHERE id = $1")
            .bind(project.id)
            .execute(pool)
            .await
            .unwrap();

        let server = test_server(Some(pool.clone()), unconfigured_oauth());
        let response = server.get("/api/categories").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: CategoryListResponse = response.json();
        assert_eq!(body.total, 2);

        // Ordered by name, counting only LIVE projects
        assert_eq!(body.categories[0].name, "DeFi");
        assert_eq!(body.categories[0].project_count, 1);
        assert_eq!(body.categories[0].color.as_deref(), Some("#10B981"));
        assert_eq!(body.categories[1].name, "Gaming");
        assert_eq!(body.categories[1].project_count, 0);
    }

    #[tokio::test]
    #[serial]
    async fn test_empty_category_table_yields_an_empty_list() {
        let Some(db) = TestDatabase::try_new().await else { return };

        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());
        let response = server.get("/api/categories").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: CategoryListResponse = response.json();
        assert!(body.categories.is_empty());
        assert_eq!(body.total, 0);
    }
}
