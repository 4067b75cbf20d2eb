// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{
    headless_options, mount_page, settings_without_browser, POSTING_PAGE,
};
use jobscout::domain::models::extraction::ExtractionErrorKind;
use jobscout::domain::services::extraction_service::ExtractionService;
use serde_json::json;
use wiremock::MockServer;

#[tokio::test]
async fn extracts_posting_from_static_fallback() {
    let server = MockServer::start().await;
    mount_page(&server, "/jobs/42", 200, POSTING_PAGE, 1).await;

    let service = ExtractionService::from_settings(&settings_without_browser());
    let result = service
        .extract_with_options(&format!("{}/jobs/42", server.uri()), &headless_options())
        .await;

    let posting = result.posting().unwrap();
    assert_eq!(posting.responsibilities, vec!["Responsibilities: build features"]);
    assert_eq!(posting.qualifications, vec!["Requirements: Bachelor's degree"]);
    assert_eq!(
        posting.skills,
        vec![
            "Requirements: Bachelor's degree",
            "Tech stack: Python, Docker, AWS"
        ]
    );
    assert_eq!(posting.source.as_deref(), Some("static"));
}

#[tokio::test]
async fn unreachable_posting_is_scrape_failed() {
    let server = MockServer::start().await;
    mount_page(&server, "/jobs/blocked", 403, "blocked", 1).await;

    let service = ExtractionService::from_settings(&settings_without_browser());
    let result = service
        .extract_with_options(&format!("{}/jobs/blocked", server.uri()), &headless_options())
        .await;

    assert_eq!(result.error(), Some(ExtractionErrorKind::ScrapeFailed));

    let value = serde_json::to_value(&result).unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(object["error"], json!("scrape_failed"));
    assert!(object["detail"].as_str().unwrap().contains("HTTP status 403"));
}
