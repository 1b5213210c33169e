#![allow(dead_code)]

//! Test infrastructure for idsync-server API tests

use idsync_server::{AppState, ShutdownCoordinator};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusBuilder;
use tower::ServiceExt;

/// AppState over a fresh in-memory database, without a metrics recorder
pub async fn create_test_app_state() -> AppState {
    let pool = idsync_db::create_memory_pool()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, None, ShutdownCoordinator::new())
}

/// AppState with a Prometheus handle that is not installed globally
pub async fn create_test_app_state_with_metrics() -> AppState {
    let mut state = create_test_app_state().await;
    state.metrics_handle = Some(PrometheusBuilder::new().build_recorder().handle());
    state
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub fn json(body: &[u8]) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}
