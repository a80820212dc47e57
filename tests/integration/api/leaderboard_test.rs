//! Leaderboard API integration tests
//!
//! Period membership comes from `launch_date`; ranks follow the standing
//! hunt score while `period_votes` counts only votes cast in the window.

#[cfg(feature = "ssr")]
mod tests {
    use axum::http::StatusCode;
    use chrono::{DateTime, Datelike, TimeZone, Utc};
    use serial_test::serial;
    use sqlx::PgPool;

    use dapphunt::backend::projects::db::insert_project;
    use dapphunt::shared::models::project::slugify;
    use dapphunt::shared::models::{LeaderboardResponse, NewProject, PeriodType, Project};

    use crate::assert_in_range;
    use crate::common::auth_helpers::create_unique_test_user;
    use crate::common::database::TestDatabase;
    use crate::common::mock_server::{test_server, test_server_without_db, unconfigured_oauth};

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    async fn seed_launched(
        pool: &PgPool,
        name: &str,
        launch_date: DateTime<Utc>,
        hunt_score: i32,
    ) -> Project {
        let body = NewProject {
            name: name.to_string(),
            description: format!("{} description", name),
            live_url: format!("https://{}.example", slugify(name)),
            solana_address: format!("{}111111111", slugify(name)),
            launch_date: Some(launch_date),
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
    async fn test_leaderboard_without_database_is_unavailable() {
        let server = test_server_without_db();

        let response = server.get("/api/leaderboard").await;

        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    #[serial]
    async fn test_monthly_window_ranks_by_hunt_score() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let pool = db.pool();

        seed_launched(pool, "June Star", day(2025, 6, 15), 30).await;
        seed_launched(pool, "June Runner", day(2025, 6, 20), 10).await;
        seed_launched(pool, "May Veteran", day(2025, 5, 10), 50).await;

        let server = test_server(Some(pool.clone()), unconfigured_oauth());
        let body: LeaderboardResponse = server
            .get("/api/leaderboard")
            .add_query_param("period", "monthly")
            .add_query_param("year", 2025)
            .add_query_param("month", 6)
            .await
            .json();

        assert_eq!(body.total, 2);
        assert_eq!(body.filter, "all");
        assert_eq!(body.leaderboard[0].project.name, "June Star");
        assert_eq!(body.leaderboard[0].rank, 1);
        assert_eq!(body.leaderboard[1].project.name, "June Runner");
        assert_eq!(body.leaderboard[1].rank, 2);

        // No votes inside the window, so the period score is the hunt score
        assert_eq!(body.leaderboard[0].period_votes, 0);
        assert_eq!(body.leaderboard[0].period_score, 30);

        // The response echoes the resolved window
        assert_eq!(body.period.period_type, PeriodType::Monthly);
        assert_eq!(body.period.year, 2025);
        assert_eq!(body.period.month, Some(6));
        assert_eq!(body.period.start_date, day(2025, 6, 1));
        assert_eq!(body.period.end_date, day(2025, 6, 30));
    }

    #[tokio::test]
    #[serial]
    async fn test_votes_cast_in_the_window_raise_the_period_score() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let pool = db.pool();
        let year = Utc::now().year();

        let project = seed_launched(pool, "Fresh Launch", Utc::now(), 10).await;
        let user = create_unique_test_user(pool).await.unwrap();
        let server = test_server(Some(pool.clone()), unconfigured_oauth());

        server
            .post(&format!("/api/projects/{}/vote", project.id))
            .authorization_bearer(&user.token)
            .json(&serde_json::json!({ "user_id": user.id, "vote_type": "up" }))
            .await
            .assert_status(StatusCode::OK);

        // No month: the monthly default widens to the whole year
        let body: LeaderboardResponse = server
            .get("/api/leaderboard")
            .add_query_param("year", year)
            .await
            .json();

        assert_eq!(body.total, 1);
        let entry = &body.leaderboard[0];
        assert_eq!(entry.period_votes, 1);
        // One vote on a fresh project: hunt score 10, plus 10 for the period vote
        assert_eq!(entry.period_score, 20);
        assert_in_range!(entry.rank, 1, 1);
    }

    #[tokio::test]
    #[serial]
    async fn test_featured_filter_narrows_the_board() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let pool = db.pool();
        let year = Utc::now().year();

        seed_launched(pool, "Ordinary", Utc::now(), 20).await;
        let featured = seed_launched(pool, "Showcase", Utc::now(), 10).await;
        sqlx::query("UPDATE projects SET featured = true WHERE id = $1")
            .bind(featured.id)
            .execute(pool)
            .await
            .unwrap();

        let server = test_server(Some(pool.clone()), unconfigured_oauth());

        let body: LeaderboardResponse = server
            .get("/api/leaderboard")
            .add_query_param("year", year)
            .add_query_param("filter", "featured")
            .await
            .json();
        assert_eq!(body.filter, "featured");
        assert_eq!(body.total, 1);
        assert_eq!(body.leaderboard[0].project.name, "Showcase");

        let body: LeaderboardResponse = server
            .get("/api/leaderboard")
            .add_query_param("year", year)
            .add_query_param("filter", "all")
            .await
            .json();
        assert_eq!(body.total, 2);
    }

    #[tokio::test]
    #[serial]
    async fn test_out_of_range_month_widens_to_the_year() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let body: LeaderboardResponse = server
            .get("/api/leaderboard")
            .add_query_param("period", "monthly")
            .add_query_param("year", 2025)
            .add_query_param("month", 13)
            .await
            .json();

        assert_eq!(body.period.start_date, day(2025, 1, 1));
        assert_eq!(body.period.end_date, day(2025, 12, 31));
    }

    #[tokio::test]
    #[serial]
    async fn test_defaults_are_monthly_current_year_all() {
        let Some(db) = TestDatabase::try_new().await else { return };
        let server = test_server(Some(db.pool().clone()), unconfigured_oauth());

        let response = server.get("/api/leaderboard").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: serde_json::Value = response.json();
        assert_eq!(body["period"]["type"], "monthly");
        assert_eq!(body["period"]["year"], Utc::now().year());
        assert_eq!(body["filter"], "all");
    }
}
