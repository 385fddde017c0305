//! Route registry - the ordered, append-only collection of route contributions.

use std::collections::HashMap;

use gantry_sdk::view::RouteContribution;

use crate::error::RegistryError;

/// Ordered registry of route contributions, keyed by path.
///
/// Strictly additive: there is no removal API, and registration of an
/// already-present path is rejected rather than silently overriding the
/// earlier contribution.
#[derive(Debug, Default)]
pub struct RouteRegistry {
    /// Contributions in registration order.
    contributions: Vec<RouteContribution>,
    /// Path -> position in `contributions`, for duplicate detection and lookup.
    index: HashMap<String, usize>,
}

impl RouteRegistry {
    /// Create an empty route registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a contribution.
    ///
    /// Fails with [`RegistryError::DuplicateRoutePath`] when the path is
    /// already registered, naming both contributing views.
    pub fn register(&mut self, contribution: RouteContribution) -> Result<(), RegistryError> {
        if let Some(&existing) = self.index.get(&contribution.path) {
            return Err(RegistryError::DuplicateRoutePath {
                path: contribution.path.clone(),
                first_view: self.contributions[existing].view.clone(),
                second_view: contribution.view.clone(),
            });
        }

        self.index
            .insert(contribution.path.clone(), self.contributions.len());
        self.contributions.push(contribution);
        Ok(())
    }

    /// All contributions in registration order. The iterator is restartable:
    /// calling this twice without intervening registration yields the same
    /// sequence.
    pub fn all(&self) -> impl Iterator<Item = &RouteContribution> {
        self.contributions.iter()
    }

    /// Look up a contribution by its exact path pattern.
    pub fn get(&self, path: &str) -> Option<&RouteContribution> {
        self.index.get(path).map(|&i| &self.contributions[i])
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use gantry_sdk::render::markup;
    use gantry_sdk::view::ContentFactory;

    fn contribution(path: &str, view: &str) -> RouteContribution {
        let factory: ContentFactory = Box::new(|_| Ok(markup("p", "content").build()));
        let mut c = RouteContribution::new(path, factory);
        c.view = view.to_string();
        c
    }

    #[test]
    fn register_keeps_insertion_order() {
        let mut registry = RouteRegistry::new();
        registry.register(contribution("/", "home")).unwrap();
        registry.register(contribution("/builders", "builders")).unwrap();
        registry.register(contribution("/changes", "changes")).unwrap();

        let paths: Vec<_> = registry.all().map(|c| c.path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/builders", "/changes"]);
    }

    #[test]
    fn duplicate_path_is_rejected_and_first_wins() {
        let mut registry = RouteRegistry::new();
        registry.register(contribution("/builds", "builds")).unwrap();

        let err = registry.register(contribution("/builds", "other")).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateRoutePath { .. }));

        // The registry is unchanged: one entry, owned by the first view.
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("/builds").unwrap().view, "builds");
    }

    #[test]
    fn all_is_an_idempotent_read() {
        let mut registry = RouteRegistry::new();
        registry.register(contribution("/workers", "workers")).unwrap();
        registry.register(contribution("/masters", "masters")).unwrap();

        let first: Vec<_> = registry.all().map(|c| c.path.clone()).collect();
        let second: Vec<_> = registry.all().map(|c| c.path.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn get_unknown_path_returns_none() {
        let registry = RouteRegistry::new();
        assert!(registry.get("/missing").is_none());
        assert!(registry.is_empty());
    }
}
