//! Workers view - connected build workers.

use gantry_sdk::render::{container, markup};
use gantry_sdk::view::{MenuItem, ViewDescriptor};

/// Contributions of the workers view.
pub fn descriptor() -> ViewDescriptor {
    ViewDescriptor::new("workers")
        .route("/workers", |_| {
            Ok(container()
                .class("workers")
                .child(markup("h1", "Workers").build())
                .child(markup("p", "Workers known to the masters, and their connections.").build())
                .build())
        })
        .menu_item(
            MenuItem::route("Workers", "/workers")
                .group("builds")
                .weight(15),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use gantry_sdk::view::MenuTarget;

    #[test]
    fn menu_entry_targets_the_workers_route() {
        let descriptor = descriptor();
        assert_eq!(
            descriptor.menu_items[0].target,
            MenuTarget::Route("/workers".to_string())
        );
    }
}
