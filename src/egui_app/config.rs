use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// On-disk shape of the persisted session
#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    token: String,
}

/// Application configuration wrapper.
///
/// Holds the backend URL and the session token. The token is persisted to
/// `<data dir>/dapphunt/session.toml` so a sign-in survives restarts.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
    token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("HUNT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = AppConfig::builder()
            .server_url(server_url)
            .build()
            .unwrap_or_default();
        let token = session_file_path().and_then(|path| read_session_file(&path));
        Self { app, token }
    }
}

impl Config {
    /// Create a new configuration, restoring any persisted session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app, token: None })
    }

    /// Set the session token and persist it
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
        match (&self.token, session_file_path()) {
            (Some(token), Some(path)) => write_session_file(&path, token),
            (None, Some(path)) => remove_session_file(&path),
            _ => {}
        }
    }

    /// Get the session token
    pub fn get_token(&self) -> Option<&String> {
        self.token.as_ref()
    }

    /// Clear the token and delete the persisted session (logout)
    pub fn clear_token(&mut self) {
        self.set_token(None);
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

/// Where the session token is persisted, when a data directory exists
fn session_file_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("dapphunt").join("session.toml"))
}

fn read_session_file(path: &Path) -> Option<String> {
    let raw = std::fs::read_to_string(path).ok()?;
    let file: SessionFile = toml::from_str(&raw).ok()?;
    if file.token.is_empty() {
        None
    } else {
        Some(file.token)
    }
}

/// Persistence is best effort; a failure only costs a re-login.
fn write_session_file(path: &Path, token: &str) {
    let file = SessionFile {
        token: token.to_string(),
    };
    let Ok(raw) = toml::to_string(&file) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = std::fs::write(path, raw);
}

fn remove_session_file(path: &Path) {
    let _ = std::fs::remove_file(path);
}
