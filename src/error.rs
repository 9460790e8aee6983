use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Upstream returned status {status}")]
    Upstream { status: u16, body: String },
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => {
                tracing::debug!(message = %msg, "Request validation failed");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Upstream { status, body } => {
                tracing::debug!(status, "Upstream rejected the message");
                // Statuses relayed from a real response are always valid u16s.
                (StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY), body)
            }
            AppError::UpstreamUnreachable(e) => {
                tracing::error!(error = %e, "Upstream unreachable");
                (StatusCode::BAD_GATEWAY, "Upstream unreachable".to_string())
            }
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
