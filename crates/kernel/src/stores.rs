//! Opaque store handles the shell passes through to the page.
//!
//! Stores are externally owned state containers (sidebar collapse state,
//! topbar state, topbar actions). The shell reads a snapshot of each and
//! hands it to the theme untouched; it never interprets or mutates them.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;

/// A named, JSON-valued state container.
#[derive(Debug)]
pub struct StoreHandle {
    name: &'static str,
    state: RwLock<Value>,
}

impl StoreHandle {
    /// Create a store with an empty object state.
    pub fn new(name: &'static str) -> Arc<Self> {
        Self::with_state(name, Value::Object(serde_json::Map::new()))
    }

    /// Create a store with an initial state.
    pub fn with_state(name: &'static str, state: Value) -> Arc<Self> {
        Arc::new(Self {
            name,
            state: RwLock::new(state),
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Snapshot of the current state.
    pub fn read(&self) -> Value {
        self.state.read().clone()
    }

    /// Replace the state. Store owners call this; the shell never does.
    pub fn write(&self, state: Value) {
        *self.state.write() = state;
    }
}

/// The three store references the shell requires.
#[derive(Debug, Clone)]
pub struct Stores {
    pub sidebar: Arc<StoreHandle>,
    pub topbar: Arc<StoreHandle>,
    pub topbar_actions: Arc<StoreHandle>,
}

impl Default for Stores {
    fn default() -> Self {
        Self {
            sidebar: StoreHandle::new("sidebar"),
            topbar: StoreHandle::new("topbar"),
            topbar_actions: StoreHandle::new("topbar_actions"),
        }
    }
}
