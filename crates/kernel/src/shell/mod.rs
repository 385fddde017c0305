//! Composition shell - turns the sealed registries plus store state into
//! rendered pages.
//!
//! The shell is built once, after composition, and renders a page per
//! navigation request. Mounting subscribes it to the clock; every tick
//! re-renders the last rendered location so time-relative output stays
//! current. Render passes never mutate the registries.

mod frame;
mod matcher;

pub use matcher::RouteOutcome;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::Utc;
use gantry_sdk::view::RenderContext;
use parking_lot::Mutex;
use tera::Context as TeraContext;
use tracing::{debug, warn};

use crate::clock::{Clock, TickSubscription};
use crate::error::ShellError;
use crate::registry::Registries;
use crate::stores::{StoreHandle, Stores};
use crate::theme::{ThemeEngine, render_element};

/// One rendered page.
#[derive(Debug, Clone)]
pub struct Page {
    pub html: String,
    /// False when the location resolved to the not-found region.
    pub found: bool,
}

/// Builder validating the shell's required collaborators.
pub struct ShellBuilder {
    registries: Arc<Registries>,
    sidebar: Option<Arc<StoreHandle>>,
    topbar: Option<Arc<StoreHandle>>,
    topbar_actions: Option<Arc<StoreHandle>>,
}

impl ShellBuilder {
    pub fn sidebar_store(mut self, store: Arc<StoreHandle>) -> Self {
        self.sidebar = Some(store);
        self
    }

    pub fn topbar_store(mut self, store: Arc<StoreHandle>) -> Self {
        self.topbar = Some(store);
        self
    }

    pub fn topbar_actions_store(mut self, store: Arc<StoreHandle>) -> Self {
        self.topbar_actions = Some(store);
        self
    }

    /// Supply all three store references at once.
    pub fn stores(self, stores: Stores) -> Self {
        self.sidebar_store(stores.sidebar)
            .topbar_store(stores.topbar)
            .topbar_actions_store(stores.topbar_actions)
    }

    /// Validate and build. A missing store is fatal here, at construction,
    /// never a render-time surprise.
    pub fn build(self) -> Result<CompositionShell, ShellError> {
        let stores = Stores {
            sidebar: self.sidebar.ok_or(ShellError::MissingStore("sidebar"))?,
            topbar: self.topbar.ok_or(ShellError::MissingStore("topbar"))?,
            topbar_actions: self
                .topbar_actions
                .ok_or(ShellError::MissingStore("topbar_actions"))?,
        };

        let theme = ThemeEngine::new()?;
        let route_order = matcher::specificity_order(&self.registries.routes);
        debug!(routes = route_order.len(), "built shell route table");

        Ok(CompositionShell {
            registries: self.registries,
            stores,
            theme,
            route_order,
            mounted: AtomicBool::new(false),
            last_location: Mutex::new(None),
            render_passes: AtomicU64::new(0),
        })
    }
}

/// The composition shell. See the module docs for lifecycle.
#[derive(Debug)]
pub struct CompositionShell {
    registries: Arc<Registries>,
    stores: Stores,
    theme: ThemeEngine,
    /// Route patterns in matching order, fixed at build time.
    route_order: Vec<String>,
    mounted: AtomicBool,
    last_location: Mutex<Option<String>>,
    render_passes: AtomicU64,
}

impl CompositionShell {
    /// Start building a shell over sealed registries.
    pub fn builder(registries: Arc<Registries>) -> ShellBuilder {
        ShellBuilder {
            registries,
            sidebar: None,
            topbar: None,
            topbar_actions: None,
        }
    }

    /// Render the page for a location.
    ///
    /// Resolves the route, invokes the matched content factory once, and
    /// assembles sidebar, topbar, and content into the final HTML. A factory
    /// failure propagates; an unmatched location renders the not-found
    /// region and invokes no factory.
    pub fn render(&self, location: &str) -> Result<Page, ShellError> {
        let now = Utc::now();

        let (content, found, page_title) = match matcher::resolve(
            &self.route_order,
            &self.registries.routes,
            location,
        ) {
            RouteOutcome::Matched {
                contribution,
                params,
            } => {
                let cx = RenderContext {
                    path: location.to_string(),
                    params,
                    now,
                };
                let element = contribution.render(&cx).map_err(ShellError::Render)?;
                (element, true, contribution.view.clone())
            }
            RouteOutcome::NotFound => {
                (frame::not_found(location), false, "Not found".to_string())
            }
        };

        let sidebar = frame::sidebar(&self.registries.menu, location);

        let mut context = TeraContext::new();
        context.insert("sidebar_state", &self.stores.sidebar.read().to_string());
        context.insert("topbar_state", &self.stores.topbar.read().to_string());
        context.insert(
            "topbar_actions_state",
            &self.stores.topbar_actions.read().to_string(),
        );
        context.insert("generated_at", &now.to_rfc3339());

        let html = self.theme.render_page(
            self.registries.menu.app_title(),
            &page_title,
            &render_element(&sidebar),
            &render_element(&content),
            &mut context,
        )?;

        *self.last_location.lock() = Some(location.to_string());
        self.render_passes.fetch_add(1, Ordering::SeqCst);

        Ok(Page { html, found })
    }

    /// Transition Unmounted -> Mounted, subscribing to the clock. Happens at
    /// most once; the returned subscription stops the ticks when dropped.
    pub fn mount(self: &Arc<Self>, clock: &dyn Clock) -> Result<TickSubscription, ShellError> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return Err(ShellError::AlreadyMounted);
        }

        let shell = Arc::clone(self);
        Ok(clock.subscribe(Box::new(move || shell.on_tick())))
    }

    /// Tick handler: one re-render of the last rendered location, if any.
    fn on_tick(&self) {
        let location = self.last_location.lock().clone();
        if let Some(location) = location
            && let Err(e) = self.render(&location)
        {
            warn!(error = %e, %location, "tick re-render failed");
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::SeqCst)
    }

    /// Completed render passes since construction.
    pub fn render_passes(&self) -> u64 {
        self.render_passes.load(Ordering::SeqCst)
    }

    /// The sealed registries this shell reads.
    pub fn registries(&self) -> &Registries {
        &self.registries
    }
}
