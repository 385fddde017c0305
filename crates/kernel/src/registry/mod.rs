//! View contribution registries and the composition step that fills them.
//!
//! Registries are populated exactly once, by [`Registries::compose`], before
//! the shell is built. The shell holds them behind `Arc` with no mutating
//! surface, so they are read-only for the rest of the process lifetime.

mod menu;
mod routes;

pub use menu::{DEFAULT_APP_TITLE, MenuSettings};
pub use routes::RouteRegistry;

use gantry_sdk::view::ViewDescriptor;
use tracing::debug;

use crate::error::RegistryError;

/// The two registries the shell reads: route contributions and menu settings.
#[derive(Debug)]
pub struct Registries {
    pub routes: RouteRegistry,
    pub menu: MenuSettings,
}

impl Registries {
    /// Fold view descriptors into fresh registries, in the given order.
    ///
    /// This is the registration phase: it runs once, before the shell's
    /// first render. Duplicate route paths fail the whole composition.
    pub fn compose(descriptors: Vec<ViewDescriptor>) -> Result<Self, RegistryError> {
        let mut routes = RouteRegistry::new();
        let mut menu = MenuSettings::new();

        for descriptor in descriptors {
            debug!(
                view = %descriptor.name,
                routes = descriptor.routes.len(),
                menu_items = descriptor.menu_items.len(),
                "registering view"
            );

            for mut contribution in descriptor.routes {
                contribution.view = descriptor.name.clone();
                routes.register(contribution)?;
            }
            for item in descriptor.menu_items {
                menu.add_item(item);
            }
        }

        Ok(Self { routes, menu })
    }
}
