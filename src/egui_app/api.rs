/**
 * Hunt API Client
 *
 * Blocking reqwest wrappers for the backend's REST endpoints. Every
 * function here runs on a worker thread spawned by the app state, never on
 * the UI thread. Errors come back as display-ready strings; when the
 * backend answered with its `{"error": ...}` body, that message is used
 * as-is.
 */

use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::egui_app::config::Config;
use crate::shared::models::{
    ApproveResponse, CategoryListResponse, ForumPost, ForumThread, LeaderboardResponse,
    NewPost, NewSubmission, NewThread, RejectRequest, SubmissionListResponse, SubmitResponse,
    ThreadDetail, ThreadListResponse, VoteKind, VoteRequest, VoteResponse,
};

pub(crate) fn get_json<T: DeserializeOwned>(
    config: &Config,
    path: &str,
    token: Option<&str>,
) -> Result<T, String> {
    let mut request = Client::new().get(config.api_url(path));
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    send(request)
}

pub(crate) fn post_json<B: Serialize, T: DeserializeOwned>(
    config: &Config,
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<T, String> {
    let mut request = Client::new().post(config.api_url(path)).json(body);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    send(request)
}

fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, String> {
    let response = request
        .send()
        .map_err(|e| format!("Network error: {}", e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(error_message(status, &body));
    }

    response
        .json()
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Pull the message out of an `{"error": ...}` body, else show the status
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return message.to_string();
        }
    }
    if body.is_empty() {
        format!("Request failed: {}", status)
    } else {
        format!("Request failed: {} - {}", status, body)
    }
}

fn leaderboard_path(
    period: &str,
    year: i32,
    month: Option<u32>,
    week: Option<u32>,
    featured_only: bool,
    limit: i64,
) -> String {
    let mut path = format!("/api/leaderboard?period={}&year={}&limit={}", period, year, limit);
    if let Some(month) = month {
        path.push_str(&format!("&month={}", month));
    }
    if let Some(week) = week {
        path.push_str(&format!("&week={}", week));
    }
    if featured_only {
        path.push_str("&filter=featured");
    }
    path
}

/// Fetch the ranked leaderboard for a period
pub fn fetch_leaderboard(
    config: &Config,
    period: &str,
    year: i32,
    month: Option<u32>,
    week: Option<u32>,
    featured_only: bool,
    limit: i64,
) -> Result<LeaderboardResponse, String> {
    let path = leaderboard_path(period, year, month, week, featured_only, limit);
    get_json(config, &path, None)
}

pub fn fetch_categories(config: &Config) -> Result<CategoryListResponse, String> {
    get_json(config, "/api/categories", None)
}

/// Cast, switch, or retract a vote on a project
pub fn vote_on_project(
    config: &Config,
    token: &str,
    project_id: Uuid,
    user_id: Uuid,
    kind: VoteKind,
) -> Result<VoteResponse, String> {
    let body = VoteRequest {
        user_id: Some(user_id),
        vote_type: Some(kind.as_str().to_string()),
    };
    post_json(
        config,
        &format!("/api/projects/{}/vote", project_id),
        Some(token),
        &body,
    )
}

pub fn fetch_threads(config: &Config, limit: i64) -> Result<ThreadListResponse, String> {
    get_json(config, &format!("/api/forum/threads?limit={}", limit), None)
}

pub fn fetch_thread(config: &Config, id: Uuid) -> Result<ThreadDetail, String> {
    get_json(config, &format!("/api/forum/threads/{}", id), None)
}

/// Open a thread; without a token the server files it under the demo user
pub fn create_thread(
    config: &Config,
    token: Option<&str>,
    body: &NewThread,
) -> Result<ForumThread, String> {
    post_json(config, "/api/forum/threads", token, body)
}

pub fn create_post(
    config: &Config,
    token: &str,
    thread_id: Uuid,
    body: &NewPost,
) -> Result<ForumPost, String> {
    post_json(
        config,
        &format!("/api/forum/threads/{}/posts", thread_id),
        Some(token),
        body,
    )
}

/// File a project submission
pub fn submit_project(
    config: &Config,
    token: &str,
    body: &NewSubmission,
) -> Result<SubmitResponse, String> {
    post_json(config, "/api/submissions", Some(token), body)
}

/// The review queue, optionally narrowed to one status
pub fn fetch_submissions(
    config: &Config,
    token: &str,
    status: Option<&str>,
) -> Result<SubmissionListResponse, String> {
    let path = match status {
        Some(status) => format!("/api/submissions?status={}", status),
        None => "/api/submissions".to_string(),
    };
    get_json(config, &path, Some(token))
}

/// Approve a submission; returns the server's confirmation message
pub fn approve_submission(config: &Config, token: &str, id: Uuid) -> Result<String, String> {
    let response: ApproveResponse = post_json(
        config,
        &format!("/api/submissions/{}/approve", id),
        Some(token),
        &serde_json::json!({}),
    )?;
    Ok(response.message)
}

/// Reject a submission; returns the server's confirmation message
pub fn reject_submission(
    config: &Config,
    token: &str,
    id: Uuid,
    reason: Option<String>,
) -> Result<String, String> {
    let response: serde_json::Value = post_json(
        config,
        &format!("/api/submissions/{}/reject", id),
        Some(token),
        &RejectRequest { reason },
    )?;
    Ok(response
        .get("message")
        .and_then(|m| m.as_str())
        .unwrap_or("Submission rejected")
        .to_string())
}
