//! Home view - the dashboard landing page.

use gantry_sdk::render::{container, markup};
use gantry_sdk::view::{MenuItem, ViewDescriptor};

/// Contributions of the home view.
pub fn descriptor() -> ViewDescriptor {
    ViewDescriptor::new("home")
        .route("/", |cx| {
            Ok(container()
                .class("home")
                .child(markup("h1", "Home").build())
                .child(markup("p", "Welcome to the build dashboard.").build())
                .child(
                    markup(
                        "p",
                        &format!("Status as of {}.", cx.now.format("%H:%M:%S UTC")),
                    )
                    .class("home__clock")
                    .build(),
                )
                .build())
        })
        .menu_item(MenuItem::route("Home", "/").weight(-20))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use gantry_sdk::view::RenderContext;
    use std::collections::HashMap;

    #[test]
    fn contributes_root_route_and_menu_entry() {
        let descriptor = descriptor();
        assert_eq!(descriptor.name, "home");
        assert_eq!(descriptor.routes[0].path, "/");
        assert_eq!(descriptor.menu_items[0].label, "Home");
    }

    #[test]
    fn content_reflects_render_time() {
        let cx = RenderContext {
            path: "/".to_string(),
            params: HashMap::new(),
            now: chrono::DateTime::from_timestamp(0, 0).unwrap(),
        };

        let element = descriptor().routes[0].render(&cx).unwrap();
        let rendered = format!("{element:?}");
        assert!(rendered.contains("00:00:00 UTC"));
    }
}
