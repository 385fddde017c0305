//! View descriptors — the typed contribution surface.
//!
//! Each view exports a [`ViewDescriptor`] listing the routes and menu entries
//! it contributes. The kernel folds descriptors into its registries in one
//! explicit composition step, so ordering and duplicate detection are
//! deterministic rather than an accident of load order.

use std::collections::HashMap;
use std::fmt;

use anyhow::Result;
use chrono::{DateTime, Utc};

use crate::render::RenderElement;

/// What a content factory may read at render time.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Current location path (e.g. `/builders/3`).
    pub path: String,
    /// Parameters extracted from the matched route pattern.
    pub params: HashMap<String, String>,
    /// Wall-clock time of this render pass.
    pub now: DateTime<Utc>,
}

/// Deferred constructor for a route's content.
///
/// Invoked once per render pass, only when its route is actually navigated
/// to — never at registration time.
pub type ContentFactory = Box<dyn Fn(&RenderContext) -> Result<RenderElement> + Send + Sync>;

/// A route contributed by a view: a unique path pattern plus the factory
/// producing its content. Patterns may contain `:param` segments.
pub struct RouteContribution {
    pub path: String,
    /// Name of the contributing view; stamped during composition.
    pub view: String,
    factory: ContentFactory,
}

impl RouteContribution {
    pub fn new(path: &str, factory: ContentFactory) -> Self {
        Self {
            path: path.to_string(),
            view: String::new(),
            factory,
        }
    }

    /// Invoke the content factory.
    pub fn render(&self, cx: &RenderContext) -> Result<RenderElement> {
        (self.factory)(cx)
    }
}

impl fmt::Debug for RouteContribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteContribution")
            .field("path", &self.path)
            .field("view", &self.view)
            .finish_non_exhaustive()
    }
}

/// Where a menu item points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuTarget {
    /// A registered route path.
    Route(String),
    /// An external URL, rendered as-is.
    External(String),
}

impl MenuTarget {
    pub fn href(&self) -> &str {
        match self {
            MenuTarget::Route(path) | MenuTarget::External(path) => path,
        }
    }
}

/// What a visibility predicate may read.
#[derive(Debug, Clone)]
pub struct MenuContext<'a> {
    /// Current location path.
    pub path: &'a str,
}

/// Plain-function visibility predicate, so menu items stay `Debug` and `Clone`.
pub type VisibilityPredicate = fn(&MenuContext<'_>) -> bool;

/// A navigation entry contributed by a view.
///
/// The registry treats items opaquely apart from insertion order; grouping
/// and weights are hints for whichever component renders the menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    pub target: MenuTarget,
    /// Sidebar group this item belongs to; ungrouped items render at top level.
    pub group: Option<String>,
    /// Sort weight within a group (lower renders first).
    pub weight: i32,
    visibility: Option<VisibilityPredicate>,
}

impl MenuItem {
    /// An item pointing at a registered route.
    pub fn route(label: &str, path: &str) -> Self {
        Self {
            label: label.to_string(),
            target: MenuTarget::Route(path.to_string()),
            group: None,
            weight: 0,
            visibility: None,
        }
    }

    /// An item pointing at an external URL.
    pub fn external(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            target: MenuTarget::External(url.to_string()),
            group: None,
            weight: 0,
            visibility: None,
        }
    }

    pub fn group(mut self, group: &str) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Restrict visibility with a predicate; items are visible by default.
    pub fn visible_when(mut self, predicate: VisibilityPredicate) -> Self {
        self.visibility = Some(predicate);
        self
    }

    pub fn is_visible(&self, cx: &MenuContext<'_>) -> bool {
        self.visibility.map(|p| p(cx)).unwrap_or(true)
    }
}

/// Everything one view contributes to the shell.
#[derive(Debug)]
pub struct ViewDescriptor {
    pub name: String,
    pub routes: Vec<RouteContribution>,
    pub menu_items: Vec<MenuItem>,
}

impl ViewDescriptor {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            routes: Vec::new(),
            menu_items: Vec::new(),
        }
    }

    /// Contribute a route. The factory runs lazily, per render pass.
    pub fn route(
        mut self,
        path: &str,
        factory: impl Fn(&RenderContext) -> Result<RenderElement> + Send + Sync + 'static,
    ) -> Self {
        self.routes.push(RouteContribution::new(path, Box::new(factory)));
        self
    }

    /// Contribute a menu entry.
    pub fn menu_item(mut self, item: MenuItem) -> Self {
        self.menu_items.push(item);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::render::markup;

    fn context(path: &str) -> RenderContext {
        RenderContext {
            path: path.to_string(),
            params: HashMap::new(),
            now: Utc::now(),
        }
    }

    #[test]
    fn descriptor_collects_routes_in_order() {
        let descriptor = ViewDescriptor::new("builders")
            .route("/builders", |_| Ok(markup("h1", "Builders").build()))
            .route("/builders/:builderid", |_| Ok(markup("h1", "Builder").build()));

        let paths: Vec<_> = descriptor.routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/builders", "/builders/:builderid"]);
    }

    #[test]
    fn factory_runs_only_when_rendered() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let descriptor = ViewDescriptor::new("home").route("/", move |_| {
            counted.fetch_add(1, Ordering::SeqCst);
            Ok(markup("h1", "Home").build())
        });

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        descriptor.routes[0].render(&context("/")).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn menu_item_visibility_defaults_to_true() {
        let item = MenuItem::route("Workers", "/workers").group("builds");
        assert!(item.is_visible(&MenuContext { path: "/" }));

        let hidden = MenuItem::route("Home", "/").visible_when(|cx| cx.path != "/");
        assert!(!hidden.is_visible(&MenuContext { path: "/" }));
        assert!(hidden.is_visible(&MenuContext { path: "/builders" }));
    }
}
