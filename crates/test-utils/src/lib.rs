//! Gantry test utilities.
//!
//! View descriptor fixtures for exercising composition and the shell without
//! pulling in the real view crates.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::anyhow;
use gantry_sdk::render::markup;
use gantry_sdk::view::ViewDescriptor;

/// A view contributing one static heading per path.
pub fn static_view(name: &str, paths: &[&str]) -> ViewDescriptor {
    let mut descriptor = ViewDescriptor::new(name);
    for path in paths {
        let heading = format!("{name}: {path}");
        descriptor = descriptor.route(path, move |_| Ok(markup("h1", &heading).build()));
    }
    descriptor
}

/// A view whose factory counts its invocations.
pub fn counting_view(name: &str, path: &str) -> (ViewDescriptor, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counted = Arc::clone(&calls);

    let descriptor = ViewDescriptor::new(name).route(path, move |_| {
        counted.fetch_add(1, Ordering::SeqCst);
        Ok(markup("h1", "counted").build())
    });

    (descriptor, calls)
}

/// A view whose factory always fails.
pub fn failing_view(name: &str, path: &str) -> ViewDescriptor {
    ViewDescriptor::new(name).route(path, |_| Err(anyhow!("factory failed")))
}
