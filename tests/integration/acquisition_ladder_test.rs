// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{
    headless_options, mount_page, settings_without_browser, POSTING_PAGE,
};
use jobscout::domain::models::acquisition::ContentSource;
use jobscout::engines::router::Acquirer;
use wiremock::MockServer;

#[tokio::test]
async fn rendered_failure_falls_back_to_static_exactly_once() {
    let server = MockServer::start().await;
    mount_page(&server, "/jobs/42", 200, POSTING_PAGE, 1).await;

    let acquirer = Acquirer::from_settings(&settings_without_browser());
    let result = acquirer
        .acquire(&format!("{}/jobs/42", server.uri()), &headless_options())
        .await;

    assert_eq!(result.error(), None);
    assert_eq!(result.source(), ContentSource::Static);
    assert_eq!(result.http_status(), Some(200));
    assert_eq!(result.content_selector(), Some(".description"));
    assert_eq!(
        result.text(),
        "Responsibilities: build features\nRequirements: Bachelor's degree\nTech stack: Python, Docker, AWS"
    );
    assert_eq!(result.snippet(), result.text());
    assert!(result.html().contains("<footer>Privacy</footer>"));

    server.verify().await;
}

#[tokio::test]
async fn total_failure_reports_both_strategies() {
    let server = MockServer::start().await;
    mount_page(&server, "/jobs/gone", 404, "<html><body>Not here</body></html>", 1).await;

    let acquirer = Acquirer::from_settings(&settings_without_browser());
    let result = acquirer
        .acquire(&format!("{}/jobs/gone", server.uri()), &headless_options())
        .await;

    let error = result.error().unwrap();
    assert!(error.starts_with("rendered_error:\nNavigation: Browser launch failed"));
    assert!(error.contains("\n\nstatic_error:\nFetch: HTTP status 404"));

    assert!(result.is_failure());
    assert_eq!(result.source(), ContentSource::None);
    assert_eq!(result.text(), "");
    assert_eq!(result.html(), "");
    assert_eq!(result.http_status(), None);

    server.verify().await;
}

#[tokio::test]
async fn repeated_acquisition_is_stable() {
    let server = MockServer::start().await;
    mount_page(&server, "/jobs/7", 200, POSTING_PAGE, 2).await;

    let acquirer = Acquirer::from_settings(&settings_without_browser());
    let url = format!("{}/jobs/7", server.uri());

    let first = acquirer.acquire(&url, &headless_options()).await;
    let second = acquirer.acquire(&url, &headless_options()).await;

    assert_eq!(first.text(), second.text());
    assert_eq!(first.content_selector(), second.content_selector());
    assert_eq!(first.source(), second.source());
}
