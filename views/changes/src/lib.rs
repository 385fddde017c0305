//! Changes view - recently picked up source changes.

use gantry_sdk::render::{container, markup};
use gantry_sdk::view::{MenuItem, ViewDescriptor};

/// Contributions of the changes view.
pub fn descriptor() -> ViewDescriptor {
    ViewDescriptor::new("changes")
        .route("/changes", |_| {
            Ok(container()
                .class("changes")
                .child(markup("h1", "Last changes").build())
                .child(markup("p", "Source changes most recently picked up for building.").build())
                .build())
        })
        .route("/changes/:changeid/builds", |cx| {
            let changeid = cx.params.get("changeid").map_or("?", String::as_str);
            Ok(container()
                .class("change-builds")
                .child(markup("h1", &format!("Builds for change {changeid}")).build())
                .build())
        })
        .menu_item(
            MenuItem::route("Last Changes", "/changes")
                .group("builds")
                .weight(10),
        )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use std::collections::HashMap;

    use gantry_sdk::view::RenderContext;

    use super::*;

    #[test]
    fn contributes_changes_route() {
        let descriptor = descriptor();
        assert_eq!(descriptor.routes[0].path, "/changes");
        assert_eq!(descriptor.menu_items[0].weight, 10);
    }

    #[test]
    fn change_builds_route_uses_change_id() {
        let descriptor = descriptor();
        let contribution = &descriptor.routes[1];
        assert_eq!(contribution.path, "/changes/:changeid/builds");

        let cx = RenderContext {
            path: "/changes/42/builds".to_string(),
            params: HashMap::from([("changeid".to_string(), "42".to_string())]),
            now: chrono::Utc::now(),
        };
        let element = contribution.render(&cx).unwrap();
        let heading = &element.children[0];
        assert_eq!(heading.value.as_deref(), Some("Builds for change 42"));
    }
}
