//! Gantry Dashboard
//!
//! Composes the registered views into a navigable dashboard and serves it.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use gantry_kernel::clock::IntervalClock;
use gantry_kernel::config::Config;
use gantry_kernel::registry::Registries;
use gantry_kernel::routes;
use gantry_kernel::shell::CompositionShell;
use gantry_kernel::state::AppState;
use gantry_kernel::stores::Stores;
use gantry_kernel::views;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    info!("Starting Gantry dashboard");

    // Load configuration from environment
    let config = Config::from_env().context("failed to load configuration")?;
    info!(port = config.port, "Configuration loaded");

    // Registration phase: fold every enabled view's contributions into the
    // registries, then seal them behind the shell.
    let mut registries = Registries::compose(views::descriptors(&config))
        .context("failed to compose view registries")?;

    if let Some(title) = &config.app_title {
        registries
            .menu
            .set_app_title(title)
            .context("failed to set app title")?;
    }

    info!(
        routes = registries.routes.len(),
        menu_items = registries.menu.items().len(),
        "Views composed"
    );

    // Build the shell; stores are constructed here and handed over
    // explicitly, the shell only passes them through.
    let shell = Arc::new(
        CompositionShell::builder(Arc::new(registries))
            .stores(Stores::default())
            .build()
            .context("failed to build composition shell")?,
    );

    // Mount: subscribe the shell to the tick clock. The subscription must
    // outlive the server, so it is held here.
    let clock = IntervalClock::new(config.tick_interval);
    let _tick = shell
        .mount(&clock)
        .context("failed to mount composition shell")?;

    // Build the router
    let app = routes::router(AppState::new(shell)).layer(TraceLayer::new_for_http());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
