//! Menu settings - application title plus the ordered menu entries.

use gantry_sdk::view::MenuItem;

use crate::error::RegistryError;

/// Title used when configuration never sets one.
pub const DEFAULT_APP_TITLE: &str = "Gantry";

/// The single menu configuration record views extend during composition.
///
/// Performs no deduplication: duplicate labels or targets are a concern of
/// the menu-rendering component, not this registry.
#[derive(Debug, Default)]
pub struct MenuSettings {
    app_title: Option<String>,
    items: Vec<MenuItem>,
}

impl MenuSettings {
    /// Create empty menu settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the application title. Settable exactly once.
    pub fn set_app_title(&mut self, title: &str) -> Result<(), RegistryError> {
        if let Some(current) = &self.app_title {
            return Err(RegistryError::AppTitleAlreadySet {
                current: current.clone(),
            });
        }
        self.app_title = Some(title.to_string());
        Ok(())
    }

    /// The application title, falling back to the built-in default.
    pub fn app_title(&self) -> &str {
        self.app_title.as_deref().unwrap_or(DEFAULT_APP_TITLE)
    }

    /// Append a menu item, preserving insertion order.
    pub fn add_item(&mut self, item: MenuItem) {
        self.items.push(item);
    }

    /// All menu items, in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn items_preserve_insertion_order() {
        let mut menu = MenuSettings::new();
        menu.add_item(MenuItem::route("A", "/a"));
        menu.add_item(MenuItem::route("B", "/b"));
        menu.add_item(MenuItem::route("C", "/c"));

        let labels: Vec<_> = menu.items().iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
    }

    #[test]
    fn duplicates_are_permitted() {
        let mut menu = MenuSettings::new();
        menu.add_item(MenuItem::route("Builders", "/builders"));
        menu.add_item(MenuItem::route("Builders", "/builders"));
        assert_eq!(menu.items().len(), 2);
    }

    #[test]
    fn app_title_is_settable_once() {
        let mut menu = MenuSettings::new();
        assert_eq!(menu.app_title(), DEFAULT_APP_TITLE);

        menu.set_app_title("Buildfarm").unwrap();
        assert_eq!(menu.app_title(), "Buildfarm");

        let err = menu.set_app_title("Other").unwrap_err();
        assert!(matches!(err, RegistryError::AppTitleAlreadySet { .. }));
        assert_eq!(menu.app_title(), "Buildfarm");
    }
}
