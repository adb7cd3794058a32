pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::excuse::handlers::handle_generate_excuse;
use crate::state::AppState;
use crate::ui::{handlers, source};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Form page
        .route("/", get(handlers::handle_index))
        .route("/generate", post(handlers::handle_generate))
        // Source download
        .route("/source", get(source::handle_download_default))
        .route("/source/*path", get(source::handle_download))
        // JSON API
        .route("/api/v1/excuses", post(handle_generate_excuse))
        .with_state(state)
}
