use axum::{
    extract::State,
    routing::{get, post},
    Router,
    Json,
};
use serde_json::{json, Value};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;
    let audio_dir = ServeDir::new(state.pipeline.store().output_dir());

    let router = Router::new()
        .route("/process-text", post(handlers::process_text))
        .route("/api/health", get(health_check));

    // Synthesized audio, so `speech_url` resolves against this server
    let prefix = system_config.audio_url_prefix.trim_matches('/');
    if prefix.is_empty() {
        router.fallback_service(audio_dir)
    } else {
        router.nest_service(&format!("/{}", prefix), audio_dir)
    }
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let python_healthy = match &state.python_service {
        Some(service) => Some(service.health_check().await.unwrap_or(false)),
        None => None,
    };
    Json(json!({
        "status": "ok",
        "python_service": python_healthy
    }))
}
