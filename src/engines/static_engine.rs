// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AcquisitionSettings;
use crate::domain::models::acquisition::{AcquiredContent, ContentSource};
use crate::domain::rules::SelectorTable;
use crate::engines::locator::locate_in_document;
use crate::engines::traits::{AcquireOptions, AcquisitionStrategy, EngineError};
use crate::utils::text_processing::{document_text, truncate_chars};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use scraper::Html;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// 静态抓取引擎
///
/// 基于reqwest实现的普通HTTP抓取，配合离线HTML解析定位内容，不执行页面脚本
pub struct StaticEngine {
    selectors: Arc<SelectorTable>,
    user_agent: String,
    accept_language: String,
    timeout: Duration,
    snippet_length: usize,
}

impl StaticEngine {
    /// 创建静态抓取引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 获取配置
    /// * `selectors` - 与渲染策略共享的内容定位表
    pub fn new(settings: &AcquisitionSettings, selectors: Arc<SelectorTable>) -> Self {
        Self {
            selectors,
            user_agent: settings.user_agent.clone(),
            accept_language: settings.accept_language.clone(),
            timeout: Duration::from_secs(settings.static_timeout_secs),
            snippet_length: settings.snippet_length,
        }
    }

    /// 每个请求附带的默认请求头
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        match HeaderValue::from_str(&self.accept_language) {
            Ok(value) => {
                headers.insert(ACCEPT_LANGUAGE, value);
            }
            Err(e) => warn!(
                "Dropping invalid Accept-Language value {:?}: {}",
                self.accept_language, e
            ),
        }
        headers
    }

    async fn fetch(&self, url: &str) -> Result<(u16, String), EngineError> {
        // Each request gets a fresh client for cookie isolation
        let client = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(self.default_headers())
            .timeout(self.timeout)
            .build()?;

        let start = Instant::now();
        let response = client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!(
            "Static fetch of {} returned {} bytes in {}ms",
            url,
            body.len(),
            start.elapsed().as_millis()
        );

        Ok((status.as_u16(), body))
    }

    /// 从原始HTML中定位职位内容
    ///
    /// 未命中任何定位规则时，退回到整页可见文本并截断为预览长度
    pub fn extract(&self, html: String, http_status: Option<u16>) -> AcquiredContent {
        let document = Html::parse_document(&html);

        let (text, content_selector) = match locate_in_document(&document, &self.selectors) {
            Some(located) => (located.text, Some(located.selector)),
            None => (
                truncate_chars(&document_text(&document), self.snippet_length),
                None,
            ),
        };

        AcquiredContent {
            text,
            html,
            source: ContentSource::Static,
            http_status,
            content_selector,
        }
    }
}

#[async_trait]
impl AcquisitionStrategy for StaticEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `_options` - 获取选项（超时只约束渲染策略，此处使用固定的短超时）
    ///
    /// # 返回值
    ///
    /// * `Ok(AcquiredContent)` - 定位到的内容
    /// * `Err(EngineError)` - 请求失败或返回非 2xx 状态码
    async fn attempt(
        &self,
        url: &str,
        _options: &AcquireOptions,
    ) -> Result<AcquiredContent, EngineError> {
        let (status, html) = self.fetch(url).await?;
        let content = self.extract(html, Some(status));

        info!(
            "Static acquisition of {} located content via {:?}",
            url, content.content_selector
        );

        Ok(content)
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "static"
    }
}

#[cfg(test)]
#[path = "static_engine_test.rs"]
mod tests;
