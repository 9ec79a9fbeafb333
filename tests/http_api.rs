//! Integration tests for the HTTP surface.
//!
//! The router is exercised in-process with `tower::ServiceExt::oneshot`;
//! services are backed by the same fakes as the sweep tests.

mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use common::{FakeDumper, incomplete_target, local_store, settings, target};
use dumpgate::config::{AuthConfig, TargetsConfig};
use dumpgate::domain::{BackupService, HealthService};
use dumpgate::notify::NoopNotifier;
use dumpgate::server::build_router;
use dumpgate::state::AppState;

const API_KEY: &str = "integration-test-key-0123456789abcdef";

struct Harness {
    router: Router,
    _scratch: tempfile::TempDir,
    _bucket_root: tempfile::TempDir,
}

fn harness(api_key: Option<&str>) -> Harness {
    let scratch = tempfile::tempdir().unwrap();
    let bucket_root = tempfile::tempdir().unwrap();

    let targets = vec![target("orders", "mongodb://db0/orders"), incomplete_target()];

    let backup = BackupService::new(
        targets,
        Arc::new(FakeDumper::new(*b"archive-bytes")),
        local_store(bucket_root.path()),
        Arc::new(NoopNotifier),
        settings(scratch.path()),
    );

    let health = HealthService::new(
        &TargetsConfig::parse(r#"[{"name": "orders", "uri": "mongodb://db0/orders"}, {}]"#)
            .unwrap(),
    );

    let state = AppState::new(
        Arc::new(backup),
        Arc::new(health),
        Arc::new(AuthConfig {
            api_key: api_key.map(String::from),
        }),
    );

    Harness {
        router: build_router(&state),
        _scratch: scratch,
        _bucket_root: bucket_root,
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ============================================================================
// Health routes
// ============================================================================

#[tokio::test]
async fn liveness_is_always_open() {
    let harness = harness(Some(API_KEY));

    let response = harness
        .router
        .oneshot(Request::get("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn readiness_reports_target_counts() {
    let harness = harness(None);

    let response = harness
        .router
        .oneshot(Request::get("/health/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["targets"], 2);
    assert_eq!(body["runnable_targets"], 1);
}

// ============================================================================
// API key enforcement
// ============================================================================

#[tokio::test]
async fn api_routes_require_the_key_when_configured() {
    let harness = harness(Some(API_KEY));

    let response = harness
        .router
        .clone()
        .oneshot(
            Request::get("/api/backup/targets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = harness
        .router
        .clone()
        .oneshot(
            Request::get("/api/backup/targets")
                .header("X-API-Key", "wrong-key-wrong-key-wrong-key-wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = harness
        .router
        .oneshot(
            Request::get("/api/backup/targets")
                .header("X-API-Key", API_KEY)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn trigger_route_is_guarded_too() {
    let harness = harness(Some(API_KEY));

    let response = harness
        .router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn no_configured_key_means_open_access() {
    let harness = harness(None);

    let response = harness
        .router
        .oneshot(
            Request::get("/api/backup/targets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Trigger and report shapes
// ============================================================================

#[tokio::test]
async fn root_trigger_returns_bare_result_array() {
    let harness = harness(None);

    let response = harness
        .router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let results = body.as_array().expect("bare array response");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["name"], "orders");
    assert_eq!(results[0]["status"], "ok");
    assert_eq!(results[1]["status"], "skipped");
}

#[tokio::test]
async fn api_run_returns_full_report() {
    let harness = harness(None);

    let response = harness
        .router
        .oneshot(
            Request::post("/api/backup/run")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["run_id"].is_string());
    assert!(body["started_at"].is_string());
    assert_eq!(body["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn target_listing_never_exposes_uris() {
    let harness = harness(None);

    let response = harness
        .router
        .oneshot(
            Request::get("/api/backup/targets")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let targets = body.as_array().unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0]["name"], "orders");
    assert_eq!(targets[0]["tool"], "mongodump");
    assert_eq!(targets[0]["runnable"], true);
    assert_eq!(targets[1]["name"], "<no-name>");
    assert_eq!(targets[1]["runnable"], false);
    assert!(targets[0].get("uri").is_none());
}
