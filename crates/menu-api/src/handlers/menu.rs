// ============================================================================
// Menu API - Menu Handlers
// File: crates/menu-api/src/handlers/menu.rs
// ============================================================================
//! Menu rendering HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use menu_core::domain::MenuTree;
use menu_core::services::MenuRequestCache;
use serde::Deserialize;
use tracing::debug;

use crate::response::{domain_error_response, ApiErrorResponse, ApiResponse};
use crate::state::AppState;

/// Query for a single menu: the page currently being viewed
#[derive(Debug, Deserialize)]
pub struct RenderMenuQuery {
    pub path: Option<String>,
}

/// Query for every navigation widget of one page
#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    /// Comma separated menu slugs, in widget order
    #[serde(default)]
    pub menus: String,
    pub path: Option<String>,
}

/// Render menu handler - GET /api/v1/menus/{slug}
pub async fn render_menu(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<RenderMenuQuery>,
) -> Result<Json<ApiResponse<MenuTree>>, ApiErrorResponse> {
    debug!("Rendering menu '{}' for {:?}", slug, query.path);

    let mut cache = MenuRequestCache::new();
    let tree = state
        .menu_service
        .render_menu(&slug, query.path.as_deref(), &mut cache)
        .await
        .map_err(|e| domain_error_response(&e))?;

    Ok(Json(ApiResponse::success(tree)))
}

/// Navigation handler - GET /api/v1/navigation
///
/// All menus of the page share one request cache, so a menu placed in
/// several widgets is read from the store once.
pub async fn render_navigation(
    State(state): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<ApiResponse<Vec<MenuTree>>>, ApiErrorResponse> {
    let slugs: Vec<String> = query
        .menus
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if slugs.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("VALIDATION_ERROR", "At least one menu slug is required")),
        ));
    }

    let mut cache = MenuRequestCache::new();
    let trees = state
        .menu_service
        .render_menus(&slugs, query.path.as_deref(), &mut cache)
        .await
        .map_err(|e| domain_error_response(&e))?;

    Ok(Json(ApiResponse::success(trees)))
}
