//! Page frame assembly - sidebar navigation and the not-found region.

use gantry_sdk::render::{RenderElement, container, link, markup};
use gantry_sdk::view::{MenuContext, MenuItem, MenuTarget};

use crate::registry::MenuSettings;

/// Build the sidebar navigation tree from the menu settings.
///
/// Groups appear in first-contribution order; items sort by weight within a
/// group, with insertion order breaking ties. Hidden items are dropped, and
/// the item whose route contains the current location is marked active.
pub fn sidebar(menu: &MenuSettings, location: &str) -> RenderElement {
    let cx = MenuContext { path: location };

    // (group, items) in first-appearance order.
    let mut groups: Vec<(Option<&str>, Vec<&MenuItem>)> = Vec::new();
    for item in menu.items() {
        if !item.is_visible(&cx) {
            continue;
        }
        let key = item.group.as_deref();
        match groups.iter_mut().find(|(group, _)| *group == key) {
            Some((_, items)) => items.push(item),
            None => groups.push((key, vec![item])),
        }
    }
    for (_, items) in &mut groups {
        items.sort_by_key(|item| item.weight);
    }

    let mut nav = container().class("menu");
    for (group, items) in groups {
        match group {
            None => {
                for item in items {
                    nav = nav.child(menu_entry(item, location));
                }
            }
            Some(name) => {
                let mut section = container()
                    .class("menu__group")
                    .child(markup("div", name).class("menu__group-label").build());
                for item in items {
                    section = section.child(menu_entry(item, location));
                }
                nav = nav.child(section.build());
            }
        }
    }
    nav.build()
}

fn menu_entry(item: &MenuItem, location: &str) -> RenderElement {
    let mut entry = link(item.target.href(), &item.label).class("menu__item");
    if is_active(&item.target, location) {
        entry = entry.class("menu__item--active");
    }
    entry.build()
}

/// A route target is active on its own path and on any path nested below
/// it, so `/builders/3` still highlights the Builders entry. The root route
/// only matches exactly, and external targets are never active.
fn is_active(target: &MenuTarget, location: &str) -> bool {
    let MenuTarget::Route(path) = target else {
        return false;
    };
    if location == path {
        return true;
    }
    path != "/"
        && location
            .strip_prefix(path.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Content region shown when no registered route matches the location.
pub fn not_found(location: &str) -> RenderElement {
    container()
        .class("not-found")
        .child(markup("h1", "Page not found").build())
        .child(markup("p", &format!("No view is registered for {location}.")).build())
        .child(link("/", "Back to home").build())
        .build()
}
