// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_test_app, mount_page, POSTING_PAGE};
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::MockServer;

#[tokio::test]
async fn health_and_version() {
    let app = create_test_app();

    let response = app.server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "OK");

    let response = app.server.get("/v1/version").await;
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn extract_endpoint_returns_posting() {
    let app = create_test_app();
    let site = MockServer::start().await;
    mount_page(&site, "/jobs/42", 200, POSTING_PAGE, 1).await;

    let response = app
        .server
        .post("/v1/extract")
        .json(&json!({
            "url": format!("{}/jobs/42", site.uri()),
            "headless": true,
            "timeout_secs": 5
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["responsibilities"], json!(["Responsibilities: build features"]));
    assert_eq!(body["source"], json!("static"));
}

#[tokio::test]
async fn extract_endpoint_reports_failure_as_data() {
    let app = create_test_app();
    let site = MockServer::start().await;
    mount_page(&site, "/jobs/down", 503, "down", 1).await;

    let response = app
        .server
        .post("/v1/extract")
        .json(&json!({ "url": format!("{}/jobs/down", site.uri()), "headless": true }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["error"], json!("scrape_failed"));
    assert!(body["detail"].as_str().unwrap().contains("static_error:"));
}

#[tokio::test]
async fn extract_endpoint_rejects_empty_url() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/extract")
        .json(&json!({ "url": "  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("url cannot be empty"));
}

#[tokio::test]
async fn acquire_endpoint_returns_raw_result() {
    let app = create_test_app();
    let site = MockServer::start().await;
    mount_page(&site, "/jobs/42", 200, POSTING_PAGE, 1).await;

    let response = app
        .server
        .post("/v1/acquire")
        .json(&json!({ "url": format!("{}/jobs/42", site.uri()), "headless": true }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["source"], json!("static"));
    assert_eq!(body["content_selector"], json!(".description"));
    assert_eq!(body["http_status"], json!(200));
    assert_eq!(body["error"], Value::Null);
}

#[tokio::test]
async fn profile_endpoint_hit_and_miss() {
    let app = create_test_app();

    let response = app.server.get("/v1/profiles/sanjana01").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["student_profile"]["email"], json!("sanjana@example.com"));
    assert_eq!(body["student_profile"]["projects"][0]["name"], json!("Seismic Classifier"));

    let response = app.server.get("/v1/profiles/ghost").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>(), json!({ "error": "Student not found" }));
}
