pub mod config_manager;
pub mod error;
pub mod grammar;
pub mod handlers;
pub mod pipeline;
pub mod python_service;
pub mod routes;
pub mod state;
pub mod translate;
pub mod tts;
pub mod utils;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router with its layers and state attached
pub fn build_app(app_state: AppState) -> Router {
    Router::new()
        .merge(routes::create_routes(&app_state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
