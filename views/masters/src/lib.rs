//! Masters view - the build masters and their liveness.

use gantry_sdk::render::{container, markup};
use gantry_sdk::view::{MenuItem, ViewDescriptor};

/// Contributions of the masters view.
pub fn descriptor() -> ViewDescriptor {
    ViewDescriptor::new("masters")
        .route("/masters", |_| {
            Ok(container()
                .class("masters")
                .child(markup("h1", "Build masters").build())
                .child(markup("p", "Masters in the cluster, active and inactive.").build())
                .build())
        })
        .menu_item(
            MenuItem::route("Build Masters", "/masters")
                .group("builds")
                .weight(20),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn contributes_masters_route() {
        let descriptor = descriptor();
        assert_eq!(descriptor.routes[0].path, "/masters");
        assert_eq!(descriptor.menu_items[0].group.as_deref(), Some("builds"));
    }
}
