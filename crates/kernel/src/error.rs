//! Application error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors raised while folding view contributions into the registries.
///
/// These surface during composition, before the shell exists; a failed
/// composition is fatal at startup.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two views contributed the same route path. Detected eagerly at
    /// registration rather than discovered at render time.
    #[error("route {path:?} registered by both {first_view:?} and {second_view:?}")]
    DuplicateRoutePath {
        path: String,
        first_view: String,
        second_view: String,
    },

    /// The application title is settable exactly once.
    #[error("app title already set to {current:?}")]
    AppTitleAlreadySet { current: String },
}

/// Errors raised by the composition shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// A required store handle was not supplied at construction.
    /// Fatal at startup, never tolerated until render time.
    #[error("missing required store: {0}")]
    MissingStore(&'static str),

    /// The shell mounts exactly once.
    #[error("shell is already mounted")]
    AlreadyMounted,

    /// A content factory or the theme failed to produce output. Propagated
    /// to the host; the shell has no recovery strategy of its own.
    #[error("render failed")]
    Render(#[from] anyhow::Error),
}

/// HTTP-facing errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Shell(#[from] ShellError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Shell(e) => {
                tracing::error!(error = %e, "shell render failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
            }
        }
    }
}

/// Result type alias using AppError.
pub type AppResult<T> = Result<T, AppError>;
