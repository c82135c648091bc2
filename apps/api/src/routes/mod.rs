pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

use crate::export::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume export
        .route("/api/v1/resume/pdf", post(handlers::handle_export_pdf))
        .route("/api/v1/resume/layout", post(handlers::handle_layout_preview))
        // Marketing page helpers
        .route(
            "/api/v1/achievements/metrics",
            post(handlers::handle_parse_metrics),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .with_state(state)
}
