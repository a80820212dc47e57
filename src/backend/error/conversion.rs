//! Error Conversion
//!
//! Converts backend errors into HTTP responses so handlers can return
//! `ApiError` directly.
//!
//! # Response Format
//!
//! Error responses are returned as JSON with the following structure:
//! ```json
//! {
//!   "error": "Error message",
//!   "status": 400
//! }
//! ```

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        // Full detail goes to the log; the body only carries the public message
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected ({}): {}", status, message);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
