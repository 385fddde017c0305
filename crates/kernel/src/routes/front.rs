//! Dashboard page routes.
//!
//! Every location is served by the composition shell; route selection within
//! the page happens in the kernel matcher, so axum only sees the root and a
//! catch-all.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use crate::error::AppResult;
use crate::state::AppState;

/// Create the dashboard router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/{*path}", get(page))
}

async fn index(State(state): State<AppState>) -> AppResult<Response> {
    render(&state, "/")
}

async fn page(State(state): State<AppState>, Path(rest): Path<String>) -> AppResult<Response> {
    render(&state, &format!("/{rest}"))
}

fn render(state: &AppState, location: &str) -> AppResult<Response> {
    let page = state.shell().render(location)?;

    let status = if page.found {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    Ok((status, Html(page.html)).into_response())
}
