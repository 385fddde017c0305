//! Schedulers view - configured schedulers and their state.

use gantry_sdk::render::{container, markup};
use gantry_sdk::view::{MenuItem, ViewDescriptor};

/// Contributions of the schedulers view.
pub fn descriptor() -> ViewDescriptor {
    ViewDescriptor::new("schedulers")
        .route("/schedulers", |_| {
            Ok(container()
                .class("schedulers")
                .child(markup("h1", "Schedulers").build())
                .child(markup("p", "Schedulers deciding when builds are started.").build())
                .build())
        })
        .menu_item(
            MenuItem::route("Schedulers", "/schedulers")
                .group("builds")
                .weight(25),
        )
}
