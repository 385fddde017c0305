//! Route matching - selects the one contribution for a location.
//!
//! Patterns are matched segment-wise; `:param` segments capture the actual
//! segment. Candidates are tried in specificity order (fewer params first,
//! then more segments), so `/builders` beats `/:anything` and registration
//! order decides among equals. First full match wins.

use std::collections::HashMap;

use gantry_sdk::view::RouteContribution;

use crate::registry::RouteRegistry;

/// Result of resolving a location against the registered routes.
#[derive(Debug)]
pub enum RouteOutcome<'a> {
    /// Exactly one contribution matched.
    Matched {
        contribution: &'a RouteContribution,
        params: HashMap<String, String>,
    },
    /// No registered pattern matched. A normal UI state, not an error.
    NotFound,
}

/// Registered patterns sorted by specificity. Computed once at shell build;
/// the registry is sealed by then.
pub fn specificity_order(registry: &RouteRegistry) -> Vec<String> {
    let mut patterns: Vec<String> = registry.all().map(|c| c.path.clone()).collect();
    patterns.sort_by_key(|path| {
        let param_count = path.matches(':').count();
        let segment_count = path.matches('/').count();
        (param_count, -(segment_count as i32))
    });
    patterns
}

/// Resolve a location path against the registry.
pub fn resolve<'a>(
    order: &[String],
    registry: &'a RouteRegistry,
    path: &str,
) -> RouteOutcome<'a> {
    for pattern in order {
        if let Some(params) = match_pattern(pattern, path)
            && let Some(contribution) = registry.get(pattern)
        {
            return RouteOutcome::Matched {
                contribution,
                params,
            };
        }
    }
    RouteOutcome::NotFound
}

/// Match a route pattern against a path, capturing `:param` segments.
///
/// `/builders/:builderid` matched against `/builders/3` yields
/// `{"builderid": "3"}`. Both sides must have the same segment count.
fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let mut pattern_segments = pattern.split('/');
    let mut path_segments = path.split('/');

    let mut params = HashMap::new();
    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(segment), Some(actual)) => match segment.strip_prefix(':') {
                Some(name) => {
                    params.insert(name.to_string(), actual.to_string());
                }
                None if segment == actual => {}
                None => return None,
            },
            _ => return None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use gantry_sdk::render::markup;
    use gantry_sdk::view::ContentFactory;

    fn registry_of(paths: &[&str]) -> RouteRegistry {
        let mut registry = RouteRegistry::new();
        for path in paths {
            let factory: ContentFactory = Box::new(|_| Ok(markup("p", "content").build()));
            registry
                .register(RouteContribution::new(path, factory))
                .unwrap();
        }
        registry
    }

    #[test]
    fn match_pattern_exact() {
        let params = match_pattern("/builders", "/builders");
        assert!(params.unwrap().is_empty());
    }

    #[test]
    fn match_pattern_with_params() {
        let params =
            match_pattern("/builders/:builderid/builds/:buildnumber", "/builders/3/builds/17")
                .unwrap();
        assert_eq!(params.get("builderid"), Some(&"3".to_string()));
        assert_eq!(params.get("buildnumber"), Some(&"17".to_string()));
    }

    #[test]
    fn match_pattern_rejects_length_mismatch() {
        assert!(match_pattern("/builders", "/builders/3").is_none());
        assert!(match_pattern("/builders/:id", "/builders").is_none());
    }

    #[test]
    fn literal_patterns_beat_param_patterns() {
        let registry = registry_of(&["/:section", "/builders"]);
        let order = specificity_order(&registry);

        match resolve(&order, &registry, "/builders") {
            RouteOutcome::Matched { contribution, .. } => {
                assert_eq!(contribution.path, "/builders");
            }
            RouteOutcome::NotFound => panic!("expected a match"),
        }
    }

    #[test]
    fn unknown_path_resolves_to_not_found() {
        let registry = registry_of(&["/", "/builders"]);
        let order = specificity_order(&registry);

        assert!(matches!(
            resolve(&order, &registry, "/does-not-exist"),
            RouteOutcome::NotFound
        ));
    }
}
