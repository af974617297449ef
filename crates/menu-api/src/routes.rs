//! Router wiring

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, menu};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Menu routes
        .route("/api/v1/menus/{slug}", get(menu::render_menu))
        .route("/api/v1/navigation", get(menu::render_navigation))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
