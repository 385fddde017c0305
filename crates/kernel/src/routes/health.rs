//! Health check endpoint.
//!
//! Reports the composed registry sizes and the running render pass count.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    routes: usize,
    menu_items: usize,
    mounted: bool,
    render_passes: u64,
}

/// Health check handler.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let shell = state.shell();
    let registries = shell.registries();

    Json(HealthResponse {
        status: "ok",
        routes: registries.routes.len(),
        menu_items: registries.menu.items().len(),
        mounted: shell.is_mounted(),
        render_passes: shell.render_passes(),
    })
}

/// Create the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
