//! Central application state shared across egui views.
//!
//! Every network call runs on a spawned worker thread; the worker sends its
//! result over an mpsc channel and the matching `check_*_result` method,
//! called once per frame, folds it back into the state. UI code never
//! blocks.

use std::sync::mpsc::{channel, Receiver};

use chrono::{DateTime, Datelike, Utc};
use uuid::Uuid;

use crate::egui_app::{api, auth, AppView, AuthState, Config};
use crate::shared::models::{
    CategoryListResponse, LeaderboardResponse, NewPost, NewSubmission, NewThread, PeriodType,
    SubmissionListResponse, SubmissionStatus, SubmitResponse, ThreadDetail, ThreadListResponse,
    UserPublic, UserStats, VoteKind, VoteResponse,
};

/// Everything the home view shows, fetched in one worker pass
pub struct HomeData {
    pub leaderboard: LeaderboardResponse,
    pub threads: ThreadListResponse,
    pub categories: CategoryListResponse,
}

/// Filter selections on the leaderboard view
#[derive(Debug, Clone, PartialEq)]
pub struct LeaderboardFilter {
    pub period: PeriodType,
    pub year: i32,
    /// 1-12, used by the daily/weekly/monthly periods
    pub month: u32,
    /// 1-5, used by the weekly period
    pub week: u32,
    pub featured_only: bool,
}

impl Default for LeaderboardFilter {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            period: PeriodType::default(),
            year: now.year(),
            month: now.month(),
            week: 1,
            featured_only: false,
        }
    }
}

impl LeaderboardFilter {
    /// The `month` query value for the selected period
    fn month_param(&self) -> Option<u32> {
        match self.period {
            PeriodType::Yearly => None,
            _ => Some(self.month),
        }
    }

    /// The `week` query value for the selected period
    fn week_param(&self) -> Option<u32> {
        match self.period {
            PeriodType::Weekly => Some(self.week),
            _ => None,
        }
    }
}

/// The submission form's text fields, all edited in place
#[derive(Debug, Clone, Default)]
pub struct SubmitForm {
    pub name: String,
    pub one_liner: String,
    pub category: String,
    pub description: String,
    pub live_url: String,
    pub solana_address: String,
    pub github_repo: String,
    pub twitter: String,
    pub discord: String,
    pub telegram: String,
    pub blog: String,
    pub token_symbol: String,
    pub token_address: String,
    pub tvl: String,
    pub team_size: String,
    /// `YYYY-MM-DD`; blank or unparsable dates are sent as absent
    pub launch_date: String,
}

impl SubmitForm {
    /// Mirror the server's required-field check so mistakes surface before
    /// the request leaves the machine
    pub fn validate(&self) -> Result<(), String> {
        for (label, value) in [
            ("Project name", &self.name),
            ("Description", &self.description),
            ("Live URL", &self.live_url),
            ("Solana address", &self.solana_address),
        ] {
            if value.trim().is_empty() {
                return Err(format!("{} is required", label));
            }
        }
        Ok(())
    }

    /// Build the request body, mapping blank optionals to absent
    pub fn to_submission(&self) -> NewSubmission {
        NewSubmission {
            project_name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            live_url: self.live_url.trim().to_string(),
            solana_address: self.solana_address.trim().to_string(),
            one_liner: opt(&self.one_liner),
            category: opt(&self.category),
            github_repo: opt(&self.github_repo),
            twitter: opt(&self.twitter),
            discord: opt(&self.discord),
            telegram: opt(&self.telegram),
            blog: opt(&self.blog),
            token_symbol: opt(&self.token_symbol),
            token_address: opt(&self.token_address),
            tvl: opt(&self.tvl),
            team_size: opt(&self.team_size),
            launch_date: parse_launch_date(&self.launch_date),
            ..Default::default()
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The new-thread form on the forum view
#[derive(Debug, Clone, Default)]
pub struct ThreadForm {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl ThreadForm {
    pub fn to_thread(&self) -> NewThread {
        NewThread {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            category: self.category.trim().to_string(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_launch_date(raw: &str) -> Option<DateTime<Utc>> {
    let date = chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()?;
    Some(DateTime::from_naive_utc_and_offset(
        date.and_time(chrono::NaiveTime::MIN),
        Utc,
    ))
}

/// Central application state shared across egui views.
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub current_view: AppView,

    // Auth view
    pub token_input: String,
    pub auth_result: Option<Receiver<Result<(String, UserPublic), String>>>,

    // Home view
    pub home: Option<HomeData>,
    pub home_error: Option<String>,
    pub home_result: Option<Receiver<Result<HomeData, String>>>,

    // Leaderboard view
    pub filter: LeaderboardFilter,
    pub leaderboard: Option<LeaderboardResponse>,
    pub leaderboard_error: Option<String>,
    pub leaderboard_result: Option<Receiver<Result<LeaderboardResponse, String>>>,

    // Voting
    pub vote_notice: Option<String>,
    pub vote_result: Option<Receiver<Result<VoteResponse, String>>>,

    // Submit view
    pub submit_form: SubmitForm,
    pub submit_notice: Option<Result<String, String>>,
    pub submit_result: Option<Receiver<Result<SubmitResponse, String>>>,

    // Admin view
    pub admin_status_filter: Option<SubmissionStatus>,
    pub admin_queue: Option<SubmissionListResponse>,
    pub admin_notice: Option<Result<String, String>>,
    pub admin_reason_input: String,
    pub admin_result: Option<Receiver<Result<SubmissionListResponse, String>>>,
    pub review_result: Option<Receiver<Result<String, String>>>,

    // Profile view
    pub my_stats: Option<UserStats>,
    pub stats_result: Option<Receiver<Result<UserStats, String>>>,

    // Forum view
    pub forum_threads: Option<ThreadListResponse>,
    pub forum_error: Option<String>,
    pub open_thread: Option<ThreadDetail>,
    pub thread_form: ThreadForm,
    pub show_thread_form: bool,
    pub reply_input: String,
    pub forum_notice: Option<String>,
    pub forum_result: Option<Receiver<Result<ThreadListResponse, String>>>,
    pub thread_result: Option<Receiver<Result<ThreadDetail, String>>>,
    pub compose_result: Option<Receiver<Result<String, String>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Build the state around an existing config, validating any restored
    /// session token in the background
    pub fn with_config(config: Config) -> Self {
        let mut state = Self {
            config,
            auth_state: AuthState::new(),
            current_view: AppView::default(),
            token_input: String::new(),
            auth_result: None,
            home: None,
            home_error: None,
            home_result: None,
            filter: LeaderboardFilter::default(),
            leaderboard: None,
            leaderboard_error: None,
            leaderboard_result: None,
            vote_notice: None,
            vote_result: None,
            submit_form: SubmitForm::default(),
            submit_notice: None,
            submit_result: None,
            admin_status_filter: Some(SubmissionStatus::Pending),
            admin_queue: None,
            admin_notice: None,
            admin_reason_input: String::new(),
            admin_result: None,
            review_result: None,
            my_stats: None,
            stats_result: None,
            forum_threads: None,
            forum_error: None,
            open_thread: None,
            thread_form: ThreadForm::default(),
            show_thread_form: false,
            reply_input: String::new(),
            forum_notice: None,
            forum_result: None,
            thread_result: None,
            compose_result: None,
        };

        // A token persisted from a previous run is validated in the
        // background; the user lands signed in without touching the Auth
        // view.
        if let Some(token) = state.config.get_token().cloned() {
            state.spawn_token_check(token);
        }

        state
    }

    /// Drain every pending worker result. Called once per frame.
    pub fn check_background_results(&mut self) {
        self.check_auth_result();
        self.check_home_result();
        self.check_leaderboard_result();
        self.check_vote_result();
        self.check_submit_result();
        self.check_admin_result();
        self.check_review_result();
        self.check_stats_result();
        self.check_forum_result();
        self.check_thread_result();
        self.check_compose_result();
    }

    // ----- auth -----

    fn spawn_token_check(&mut self, token: String) {
        self.auth_state.loading = true;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = auth::fetch_me(&config, &token).map(|user| (token, user));
            let _ = tx.send(result);
        });

        self.auth_result = Some(rx);
    }

    /// Sign in with a token pasted from the browser callback
    pub fn handle_signin_with_token(&mut self) {
        let token = self.token_input.trim().to_string();
        if token.is_empty() {
            self.auth_state
                .set_error("Paste the session token first".to_string());
            return;
        }

        self.auth_state.clear_error();
        self.spawn_token_check(token);
    }

    pub fn check_auth_result(&mut self) {
        let Some(rx) = &self.auth_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.auth_result = None;
        self.auth_state.loading = false;

        match result {
            Ok((token, user)) => {
                self.config.set_token(Some(token));
                self.auth_state.authenticated = true;
                self.auth_state.user = Some(user);
                self.auth_state.error = None;
                self.token_input.clear();
                if self.current_view == AppView::Auth {
                    self.current_view = AppView::Home;
                }
            }
            Err(e) => {
                // A stored token that no longer validates is dropped so the
                // next start doesn't retry it.
                self.config.clear_token();
                self.auth_state.set_error(e);
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(token) = self.config.get_token().cloned() {
            let config = self.config.clone();
            std::thread::spawn(move || {
                if let Err(e) = auth::signout(&config, &token) {
                    tracing::debug!("Signout request failed: {}", e);
                }
            });
        }

        self.config.clear_token();
        self.auth_state = AuthState::new();
        self.my_stats = None;
        self.admin_queue = None;
        self.admin_notice = None;
        self.current_view = AppView::Home;
    }

    // ----- home -----

    pub fn load_home(&mut self) {
        if self.home_result.is_some() {
            return;
        }
        self.home_error = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let now = Utc::now();
            let result = api::fetch_leaderboard(
                &config,
                PeriodType::Daily.as_str(),
                now.year(),
                Some(now.month()),
                None,
                false,
                10,
            )
            .and_then(|leaderboard| {
                let threads = api::fetch_threads(&config, 5)?;
                let categories = api::fetch_categories(&config)?;
                Ok(HomeData {
                    leaderboard,
                    threads,
                    categories,
                })
            });
            let _ = tx.send(result);
        });

        self.home_result = Some(rx);
    }

    pub fn check_home_result(&mut self) {
        let Some(rx) = &self.home_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.home_result = None;
        match result {
            Ok(data) => self.home = Some(data),
            Err(e) => self.home_error = Some(e),
        }
    }

    // ----- leaderboard -----

    pub fn load_leaderboard(&mut self) {
        if self.leaderboard_result.is_some() {
            return;
        }
        self.leaderboard_error = None;

        let config = self.config.clone();
        let filter = self.filter.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::fetch_leaderboard(
                &config,
                filter.period.as_str(),
                filter.year,
                filter.month_param(),
                filter.week_param(),
                filter.featured_only,
                50,
            );
            let _ = tx.send(result);
        });

        self.leaderboard_result = Some(rx);
    }

    pub fn check_leaderboard_result(&mut self) {
        let Some(rx) = &self.leaderboard_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.leaderboard_result = None;
        match result {
            Ok(response) => self.leaderboard = Some(response),
            Err(e) => self.leaderboard_error = Some(e),
        }
    }

    // ----- voting -----

    pub fn handle_vote(&mut self, project_id: Uuid, kind: VoteKind) {
        let token = self.config.get_token().cloned();
        let user = self.auth_state.user.clone();
        let (Some(token), Some(user)) = (token, user) else {
            self.vote_notice = Some("Sign in to vote".to_string());
            return;
        };

        if self.vote_result.is_some() {
            return;
        }

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::vote_on_project(&config, &token, project_id, user.id, kind);
            let _ = tx.send(result);
        });

        self.vote_result = Some(rx);
    }

    pub fn check_vote_result(&mut self) {
        let Some(rx) = &self.vote_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.vote_result = None;
        match result {
            Ok(response) => {
                self.vote_notice = Some(response.message);
                // Counts changed server-side; refetch whichever ranking is
                // on screen.
                match self.current_view {
                    AppView::Leaderboard => self.load_leaderboard(),
                    _ => self.load_home(),
                }
            }
            Err(e) => self.vote_notice = Some(e),
        }
    }

    // ----- submit -----

    pub fn handle_submit(&mut self) {
        if let Err(message) = self.submit_form.validate() {
            self.submit_notice = Some(Err(message));
            return;
        }
        let Some(token) = self.config.get_token().cloned() else {
            self.submit_notice =
                Some(Err("You must be signed in to submit a project".to_string()));
            return;
        };
        if self.submit_result.is_some() {
            return;
        }

        self.submit_notice = None;
        let body = self.submit_form.to_submission();
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::submit_project(&config, &token, &body);
            let _ = tx.send(result);
        });

        self.submit_result = Some(rx);
    }

    pub fn check_submit_result(&mut self) {
        let Some(rx) = &self.submit_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.submit_result = None;
        match result {
            Ok(response) => {
                self.submit_form.clear();
                self.submit_notice = Some(Ok(format!(
                    "{} \"{}\" is now {}.",
                    response.message,
                    response.submission.project_name,
                    response.submission.status.as_str()
                )));
            }
            Err(e) => self.submit_notice = Some(Err(e)),
        }
    }

    // ----- admin -----

    pub fn load_submissions(&mut self) {
        let Some(token) = self.config.get_token().cloned() else {
            return;
        };
        if self.admin_result.is_some() {
            return;
        }

        let status = self.admin_status_filter.map(|s| s.as_str().to_string());
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::fetch_submissions(&config, &token, status.as_deref());
            let _ = tx.send(result);
        });

        self.admin_result = Some(rx);
    }

    pub fn check_admin_result(&mut self) {
        let Some(rx) = &self.admin_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.admin_result = None;
        match result {
            Ok(response) => self.admin_queue = Some(response),
            Err(e) => self.admin_notice = Some(Err(e)),
        }
    }

    pub fn handle_approve(&mut self, id: Uuid) {
        self.spawn_review(id, None);
    }

    pub fn handle_reject(&mut self, id: Uuid) {
        let reason = opt(&self.admin_reason_input);
        self.admin_reason_input.clear();
        self.spawn_review(id, Some(reason));
    }

    /// `reason`: None = approve, Some(notes) = reject
    fn spawn_review(&mut self, id: Uuid, reason: Option<Option<String>>) {
        let Some(token) = self.config.get_token().cloned() else {
            return;
        };
        if self.review_result.is_some() {
            return;
        }

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match reason {
                None => api::approve_submission(&config, &token, id),
                Some(reason) => api::reject_submission(&config, &token, id, reason),
            };
            let _ = tx.send(result);
        });

        self.review_result = Some(rx);
    }

    pub fn check_review_result(&mut self) {
        let Some(rx) = &self.review_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.review_result = None;
        match result {
            Ok(message) => {
                self.admin_notice = Some(Ok(message));
                self.admin_queue = None;
                self.load_submissions();
            }
            Err(e) => self.admin_notice = Some(Err(e)),
        }
    }

    // ----- profile -----

    pub fn load_stats(&mut self) {
        let Some(token) = self.config.get_token().cloned() else {
            return;
        };
        if self.stats_result.is_some() {
            return;
        }

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = auth::fetch_my_stats(&config, &token);
            let _ = tx.send(result);
        });

        self.stats_result = Some(rx);
    }

    pub fn check_stats_result(&mut self) {
        let Some(rx) = &self.stats_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.stats_result = None;
        if let Ok(stats) = result {
            self.my_stats = Some(stats);
        }
    }

    // ----- forum -----

    pub fn load_threads(&mut self) {
        if self.forum_result.is_some() {
            return;
        }
        self.forum_error = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::fetch_threads(&config, 20);
            let _ = tx.send(result);
        });

        self.forum_result = Some(rx);
    }

    pub fn check_forum_result(&mut self) {
        let Some(rx) = &self.forum_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.forum_result = None;
        match result {
            Ok(response) => self.forum_threads = Some(response),
            Err(e) => self.forum_error = Some(e),
        }
    }

    pub fn load_thread(&mut self, id: Uuid) {
        if self.thread_result.is_some() {
            return;
        }

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::fetch_thread(&config, id);
            let _ = tx.send(result);
        });

        self.thread_result = Some(rx);
    }

    pub fn check_thread_result(&mut self) {
        let Some(rx) = &self.thread_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.thread_result = None;
        match result {
            Ok(detail) => self.open_thread = Some(detail),
            Err(e) => self.forum_notice = Some(e),
        }
    }

    pub fn close_thread(&mut self) {
        self.open_thread = None;
        self.reply_input.clear();
    }

    pub fn handle_new_thread(&mut self) {
        let body = self.thread_form.to_thread();
        if body.title.is_empty() || body.content.is_empty() || body.category.is_empty() {
            self.forum_notice = Some("Title, content, and category are required".to_string());
            return;
        }
        if self.compose_result.is_some() {
            return;
        }

        let token = self.config.get_token().cloned();
        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::create_thread(&config, token.as_deref(), &body)
                .map(|thread| format!("Thread \"{}\" created", thread.title));
            let _ = tx.send(result);
        });

        self.compose_result = Some(rx);
    }

    pub fn handle_reply(&mut self) {
        let Some(thread_id) = self.open_thread.as_ref().map(|t| t.id) else {
            return;
        };
        let content = self.reply_input.trim().to_string();
        if content.is_empty() {
            self.forum_notice = Some("Write a reply first".to_string());
            return;
        }
        let Some(token) = self.config.get_token().cloned() else {
            self.forum_notice = Some("You must be signed in to reply".to_string());
            return;
        };
        if self.compose_result.is_some() {
            return;
        }

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = api::create_post(&config, &token, thread_id, &NewPost { content })
                .map(|_| "Reply posted".to_string());
            let _ = tx.send(result);
        });

        self.compose_result = Some(rx);
    }

    pub fn check_compose_result(&mut self) {
        let Some(rx) = &self.compose_result else { return };
        let Ok(result) = rx.try_recv() else { return };

        self.compose_result = None;
        match result {
            Ok(message) => {
                self.forum_notice = Some(message);
                self.thread_form.clear();
                self.show_thread_form = false;
                self.reply_input.clear();
                // Refresh whichever forum surface is on screen.
                if let Some(id) = self.open_thread.as_ref().map(|t| t.id) {
                    self.load_thread(id);
                }
                self.forum_threads = None;
                self.load_threads();
            }
            Err(e) => self.forum_notice = Some(e),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
