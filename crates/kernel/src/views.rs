//! The built-in view set composed into the dashboard.
//!
//! The explicit list below is the whole registration phase: descriptor order
//! here is registration order everywhere else. New views are added by
//! appending to this list, nowhere else.

use gantry_sdk::view::ViewDescriptor;
use tracing::info;

use crate::config::Config;

/// Descriptors of every enabled view, in registration order.
pub fn descriptors(config: &Config) -> Vec<ViewDescriptor> {
    let all = vec![
        gantry_view_home::descriptor(),
        gantry_view_builders::descriptor(),
        gantry_view_builds::descriptor(),
        gantry_view_changes::descriptor(),
        gantry_view_masters::descriptor(),
        gantry_view_schedulers::descriptor(),
        gantry_view_workers::descriptor(),
    ];

    all.into_iter()
        .filter(|descriptor| {
            let enabled = !config.disabled_views.contains(&descriptor.name);
            if !enabled {
                info!(view = %descriptor.name, "view disabled by configuration");
            }
            enabled
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn all_views_enabled_by_default() {
        let names: Vec<_> = descriptors(&Config::default())
            .iter()
            .map(|d| d.name.clone())
            .collect();
        assert_eq!(
            names,
            vec!["home", "builders", "builds", "changes", "masters", "schedulers", "workers"]
        );
    }

    #[test]
    fn disabled_views_are_skipped() {
        let config = Config {
            disabled_views: vec!["changes".to_string(), "workers".to_string()],
            ..Config::default()
        };

        let names: Vec<_> = descriptors(&config).iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["home", "builders", "builds", "masters", "schedulers"]);
    }
}
