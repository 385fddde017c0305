//! HTTP surface tests: the composed dashboard served through axum.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gantry_kernel::config::Config;
use gantry_kernel::registry::Registries;
use gantry_kernel::routes;
use gantry_kernel::shell::CompositionShell;
use gantry_kernel::state::AppState;
use gantry_kernel::stores::Stores;
use gantry_kernel::views;

fn app() -> Router {
    let mut registries = Registries::compose(views::descriptors(&Config::default())).unwrap();
    registries.menu.set_app_title("Buildfarm").unwrap();

    let shell = Arc::new(
        CompositionShell::builder(Arc::new(registries))
            .stores(Stores::default())
            .build()
            .unwrap(),
    );

    routes::router(AppState::new(shell))
}

async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn root_serves_the_home_view() {
    let (status, body) = get(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Welcome to the build dashboard"));
    assert!(body.contains("Buildfarm"));
}

#[tokio::test]
async fn nested_locations_reach_the_kernel_matcher() {
    let (status, body) = get(app(), "/builders/3/builds/17").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Build 17 on builder 3"));
}

#[tokio::test]
async fn unknown_location_is_a_not_found_page() {
    let (status, body) = get(app(), "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("Page not found"));
    // The frame still renders around the not-found region.
    assert!(body.contains("Buildfarm"));
}

#[tokio::test]
async fn sidebar_marks_the_active_entry() {
    let (_, body) = get(app(), "/workers").await;
    assert!(body.contains("menu__item--active\" href=\"/workers\""));
}

#[tokio::test]
async fn health_reports_registry_sizes() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["routes"], 10);
    assert_eq!(health["menu_items"], 7);
    assert_eq!(health["mounted"], false);
}
