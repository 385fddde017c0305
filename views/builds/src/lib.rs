//! Builds view - single-build pages and the pending build request queue.

use gantry_sdk::render::{container, link, markup};
use gantry_sdk::view::{MenuItem, ViewDescriptor};

/// Contributions of the builds view.
pub fn descriptor() -> ViewDescriptor {
    ViewDescriptor::new("builds")
        .route("/builders/:builderid/builds/:buildnumber", |cx| {
            let builderid = cx.params.get("builderid").cloned().unwrap_or_default();
            let number = cx.params.get("buildnumber").cloned().unwrap_or_default();
            Ok(container()
                .class("build")
                .child(
                    markup("h1", &format!("Build {number} on builder {builderid}")).build(),
                )
                .child(
                    link(&format!("/builders/{builderid}"), "Builder page")
                        .class("build__builder-link")
                        .build(),
                )
                .build())
        })
        .route("/pendingbuildrequests", |_| {
            Ok(container()
                .class("pending-build-requests")
                .child(markup("h1", "Pending build requests").build())
                .child(markup("p", "Build requests waiting for an available worker.").build())
                .build())
        })
        .menu_item(
            MenuItem::route("Pending Builds", "/pendingbuildrequests")
                .group("builds")
                .weight(5),
        )
}
