//! HTTP route handlers.

pub mod front;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Assemble the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(front::router())
        .merge(health::router())
        .with_state(state)
}
