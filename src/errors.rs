use axum::{http::StatusCode, Json};
use serde_json::json;

/// Error surface of the API. Missing or unparsable resources never reach
/// this type; it exists for failures the reload path cannot absorb.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub detail: String,
}

impl AppError {
    pub fn internal(message: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            detail: err.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal("Failed to reload data", err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(json!({
            "success": false,
            "message": self.message,
            "error": self.detail,
        }));
        (self.status, body).into_response()
    }
}
