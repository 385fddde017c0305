//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::shell::CompositionShell;

/// Application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    shell: Arc<CompositionShell>,
}

impl AppState {
    pub fn new(shell: Arc<CompositionShell>) -> Self {
        Self { shell }
    }

    pub fn shell(&self) -> &CompositionShell {
        &self.shell
    }
}
