use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Failures surfaced by `POST /process-text`
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("grammar correction failed: {0:#}")]
    Grammar(anyhow::Error),
    #[error("translation failed: {0:#}")]
    Translation(anyhow::Error),
    #[error("speech synthesis failed: {0:#}")]
    Synthesis(anyhow::Error),
    #[error("failed to store synthesized audio: {0}")]
    Storage(#[from] std::io::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Grammar(_)
            | AppError::Translation(_)
            | AppError::Synthesis(_)
            | AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
