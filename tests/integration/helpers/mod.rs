// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use jobscout::config::settings::{AcquisitionSettings, DatabaseSettings};
use jobscout::domain::services::extraction_service::ExtractionService;
use jobscout::domain::services::profile_service::ProfileService;
use jobscout::engines::traits::AcquireOptions;
use jobscout::presentation::routes;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const POSTING_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Backend Engineer</title><script>var tracking = 1;</script></head>
  <body>
    <header>Acme Careers</header>
    <div class="description">
      <p>Responsibilities: build features</p>
      <p>Requirements: Bachelor's degree</p>
      <p>Tech stack: Python, Docker, AWS</p>
    </div>
    <footer>Privacy</footer>
  </body>
</html>"#;

/// 渲染策略必然失败（浏览器不存在）的获取配置
pub fn settings_without_browser() -> AcquisitionSettings {
    AcquisitionSettings {
        chrome_executable: Some("/nonexistent/jobscout/chrome".to_string()),
        static_timeout_secs: 5,
        script_settle_ms: 0,
        dismissal_settle_ms: 0,
        ..AcquisitionSettings::default()
    }
}

pub fn headless_options() -> AcquireOptions {
    AcquireOptions {
        headless: true,
        timeout: Duration::from_secs(5),
    }
}

/// 挂载一个只允许被请求指定次数的页面
pub async fn mount_page(server: &MockServer, route: &str, status: u16, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_string(), "text/html"))
        .expect(times)
        .mount(server)
        .await;
}

pub fn local_database(dir: &TempDir) -> DatabaseSettings {
    DatabaseSettings {
        url: None,
        local_path: dir
            .path()
            .join("dev_data.sqlite")
            .to_string_lossy()
            .into_owned(),
        ..DatabaseSettings::default()
    }
}

pub struct TestApp {
    pub server: TestServer,
    // Keeps the SQLite file alive
    _dir: TempDir,
}

pub fn create_test_app() -> TestApp {
    let dir = TempDir::new().unwrap();

    let extraction = Arc::new(ExtractionService::from_settings(&settings_without_browser()));
    let profiles = Arc::new(ProfileService::from_settings(&local_database(&dir)));

    let server = TestServer::new(routes::routes(extraction, profiles)).unwrap();

    TestApp { server, _dir: dir }
}
