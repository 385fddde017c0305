//! Builders view - the builder listing and single-builder pages.

use gantry_sdk::render::{container, link, markup};
use gantry_sdk::view::{MenuItem, ViewDescriptor};

/// Contributions of the builders view.
pub fn descriptor() -> ViewDescriptor {
    ViewDescriptor::new("builders")
        .route("/builders", |_| {
            Ok(container()
                .class("builders")
                .child(markup("h1", "Builders").build())
                .child(
                    markup("p", "All configured builders, with their most recent activity.")
                        .build(),
                )
                .build())
        })
        .route("/builders/:builderid", |cx| {
            let builderid = cx.params.get("builderid").cloned().unwrap_or_default();
            Ok(container()
                .class("builder")
                .child(markup("h1", &format!("Builder {builderid}")).build())
                .child(link("/builders", "All builders").class("builder__back").build())
                .build())
        })
        .menu_item(MenuItem::route("Builders", "/builders").group("builds"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn contributes_listing_and_detail_routes() {
        let descriptor = descriptor();
        let paths: Vec<_> = descriptor.routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/builders", "/builders/:builderid"]);
        assert_eq!(descriptor.menu_items[0].group.as_deref(), Some("builds"));
    }
}
