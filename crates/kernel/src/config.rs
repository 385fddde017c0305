//! Configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Application title shown in the topbar. When set, this performs the
    /// one permitted title assignment; otherwise the built-in default is used.
    pub app_title: Option<String>,

    /// Interval between clock ticks driving re-renders (default: 1s).
    pub tick_interval: Duration,

    /// View names to skip during composition (from DISABLED_VIEWS env var).
    pub disabled_views: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let app_title = env::var("APP_TITLE").ok().filter(|t| !t.is_empty());

        let tick_interval_secs: u64 = env::var("TICK_INTERVAL_SECS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .context("TICK_INTERVAL_SECS must be a valid u64")?;

        let disabled_views = env::var("DISABLED_VIEWS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            port,
            app_title,
            tick_interval: Duration::from_secs(tick_interval_secs),
            disabled_views,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            app_title: None,
            tick_interval: Duration::from_secs(1),
            disabled_views: Vec::new(),
        }
    }
}
