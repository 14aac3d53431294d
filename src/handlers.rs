use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::warn;

use crate::error::AppError;
use crate::pipeline::{ProcessTextRequest, ProcessTextResponse};
use crate::state::AppState;

/// POST /process-text
pub async fn process_text(
    State(state): State<AppState>,
    payload: Result<Json<ProcessTextRequest>, JsonRejection>,
) -> Result<Json<ProcessTextResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected process-text body: {}", rejection.body_text());
        AppError::InvalidRequest(rejection.body_text())
    })?;

    let feedback = state.pipeline.process(&request).await?;
    Ok(Json(feedback.into()))
}
