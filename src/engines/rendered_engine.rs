// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AcquisitionSettings;
use crate::domain::models::acquisition::{AcquiredContent, ContentSource};
use crate::domain::rules::{PopupRule, PopupRuleTable, SelectorTable};
use crate::engines::locator::LocatedContent;
use crate::engines::traits::{AcquireOptions, AcquisitionStrategy, EngineError};
use crate::utils::text_processing::{html_to_text, normalize_lines};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::network::{
    EventLoadingFailed, EventResponseReceived, ResourceType,
};
use chromiumoxide::cdp::browser_protocol::page::{EventDomContentEventFired, NavigateParams};
use chromiumoxide::element::Element;
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::{FutureExt, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// 导航失败时 Chrome 显示的内置错误页地址前缀
const ERROR_PAGE_SCHEME: &str = "chrome-error://";

/// 浏览器会话
///
/// 每次渲染独立启动一个浏览器进程，使用独立的临时用户目录。
/// 正常路径通过 [`BrowserSession::close`] 关闭；任何其它退出路径（提前返回、panic、
/// 任务取消）在 `Drop` 中终止 CDP 事件循环，浏览器进程随 `Browser` 一起回收，
/// 临时目录随 `TempDir` 一起删除。
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
    _profile_dir: TempDir,
}

impl BrowserSession {
    async fn launch(
        settings: &AcquisitionSettings,
        options: &AcquireOptions,
    ) -> Result<Self, EngineError> {
        let profile_dir = tempfile::Builder::new()
            .prefix("jobscout-session-")
            .tempdir()
            .map_err(|e| EngineError::BrowserLaunch(format!("profile directory: {}", e)))?;

        let mut builder = BrowserConfig::builder()
            .user_data_dir(profile_dir.path())
            .no_sandbox()
            .request_timeout(options.timeout)
            .window_size(settings.viewport_width, settings.viewport_height)
            .viewport(Viewport {
                width: settings.viewport_width,
                height: settings.viewport_height,
                device_scale_factor: None,
                emulating_mobile: false,
                is_landscape: true,
                has_touch: false,
            })
            // Hide navigator.webdriver from the page
            .arg("--disable-blink-features=AutomationControlled")
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage");

        if !options.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &settings.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let config = builder.build().map_err(EngineError::BrowserLaunch)?;
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| EngineError::BrowserLaunch(e.to_string()))?;

        // Spawn a handler to process browser events
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler event error: {}", e);
                }
            }
        });

        Ok(Self {
            browser,
            handler,
            _profile_dir: profile_dir,
        })
    }

    async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            debug!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            debug!("Failed to wait for browser exit: {}", e);
        }
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

/// 渲染抓取引擎
///
/// 基于chromiumoxide实现的浏览器渲染获取策略：导航、关闭弹窗、按定位表查找职位内容
pub struct RenderedEngine {
    settings: AcquisitionSettings,
    selectors: Arc<SelectorTable>,
    popups: Arc<PopupRuleTable>,
}

impl RenderedEngine {
    /// 创建渲染抓取引擎
    ///
    /// # 参数
    ///
    /// * `settings` - 获取配置
    /// * `selectors` - 内容定位表
    /// * `popups` - 弹窗关闭规则表
    pub fn new(
        settings: &AcquisitionSettings,
        selectors: Arc<SelectorTable>,
        popups: Arc<PopupRuleTable>,
    ) -> Self {
        Self {
            settings: settings.clone(),
            selectors,
            popups,
        }
    }

    async fn render(
        &self,
        session: &BrowserSession,
        url: &str,
        options: &AcquireOptions,
    ) -> Result<AcquiredContent, EngineError> {
        let page = session.browser.new_page("about:blank").await?;
        page.set_user_agent(self.settings.user_agent.as_str())
            .await?;

        let http_status = tokio::time::timeout(options.timeout, navigate(&page, url))
            .await
            .map_err(|_| EngineError::Timeout(options.timeout))??;

        // Let page scripts run
        tokio::time::sleep(Duration::from_millis(self.settings.script_settle_ms)).await;

        self.dismiss_popups(&page).await;

        tokio::time::sleep(Duration::from_millis(self.settings.dismissal_settle_ms)).await;

        let located = self.locate(&page).await;
        let html = page.content().await?;

        let content = match located {
            Some(located) => AcquiredContent {
                text: located.text,
                html,
                source: ContentSource::Rendered,
                http_status,
                content_selector: Some(located.selector),
            },
            None => {
                let text = body_text(&page, &html).await;
                AcquiredContent {
                    text,
                    html,
                    source: ContentSource::Rendered,
                    http_status,
                    content_selector: None,
                }
            }
        };

        Ok(content)
    }

    /// 弹窗关闭
    ///
    /// 对每条规则查询全部匹配元素并逐个尝试点击，任何单个失败都被忽略
    async fn dismiss_popups(&self, page: &Page) {
        let mut clicked = 0usize;

        for rule in self.popups.rules() {
            let elements = match rule {
                PopupRule::Css(selector) => match page.find_elements(selector.as_str()).await {
                    Ok(elements) => elements,
                    Err(e) => {
                        debug!("Popup rule {} query failed: {}", rule, e);
                        continue;
                    }
                },
                PopupRule::ButtonLabel(label) => labelled_buttons(page, label).await,
            };

            for element in &elements {
                if self.try_click(element).await {
                    clicked += 1;
                }
            }
        }

        debug!("Popup dismissal pass clicked {} elements", clicked);
    }

    async fn try_click(&self, element: &Element) -> bool {
        let timeout = Duration::from_millis(self.settings.click_timeout_ms);
        match tokio::time::timeout(timeout, element.click()).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                debug!("Popup click failed: {}", e);
                false
            }
            Err(_) => {
                debug!("Popup click timed out after {:?}", timeout);
                false
            }
        }
    }

    /// 按定位表在渲染后的页面中查找职位内容
    async fn locate(&self, page: &Page) -> Option<LocatedContent> {
        for rule in self.selectors.candidates() {
            let element = match page.find_element(rule.selector.as_str()).await {
                Ok(element) => element,
                Err(_) => continue,
            };

            let inner_html = match element.inner_html().await {
                Ok(Some(inner_html)) => inner_html,
                Ok(None) => continue,
                Err(e) => {
                    debug!("Reading {} failed: {}", rule.selector, e);
                    continue;
                }
            };

            let text = html_to_text(&inner_html);
            if text.is_empty() {
                debug!("Content selector {} matched an empty element", rule.selector);
                continue;
            }

            return Some(LocatedContent {
                selector: rule.selector.clone(),
                text,
            });
        }

        None
    }
}

/// 导航到目标地址，只等待 DOM 就绪
///
/// chromiumoxide 对 `Page.navigate` 的响应要等到 `load` 事件（包括所有子框架），
/// 因此这里以主框架的 DOMContentLoaded 事件为准，先到者胜出。
/// 返回主文档响应的状态码（如果观察到）
async fn navigate(page: &Page, url: &str) -> Result<Option<u16>, EngineError> {
    let mut responses = page.event_listener::<EventResponseReceived>().await?;
    let mut failures = page.event_listener::<EventLoadingFailed>().await?;
    let mut dom_ready = page.event_listener::<EventDomContentEventFired>().await?;

    // The navigate future is dropped once DOMContentLoaded wins
    {
        let navigation = page.execute(NavigateParams::new(url));
        tokio::pin!(navigation);

        tokio::select! {
            response = &mut navigation => {
                let response = response?;
                if let Some(error_text) = response.result.error_text.as_ref() {
                    return Err(EngineError::Navigation(format!("{}: {}", url, error_text)));
                }
            }
            event = dom_ready.next() => {
                if event.is_none() {
                    return Err(EngineError::Navigation(format!(
                        "{}: page closed before DOMContentLoaded",
                        url
                    )));
                }
                debug!("DOMContentLoaded fired for {}", url);
            }
        }
    }

    let mut document_failure = None;
    while let Some(Some(event)) = failures.next().now_or_never() {
        if event.r#type == ResourceType::Document && !event.canceled.unwrap_or(false) {
            document_failure = Some(event.error_text.clone());
            break;
        }
    }
    let current_url = page.url().await.ok().flatten();
    if let Some(message) = navigation_failure(document_failure.as_deref(), current_url.as_deref())
    {
        return Err(EngineError::Navigation(format!("{}: {}", url, message)));
    }

    let mut status = None;
    while let Some(Some(event)) = responses.next().now_or_never() {
        if event.r#type == ResourceType::Document {
            status = u16::try_from(event.response.status).ok();
            break;
        }
    }

    Ok(status)
}

/// 判断 DOM 就绪后的页面是否其实是浏览器的错误页
///
/// # 参数
///
/// * `document_failure` - 主文档加载失败事件中的错误文本
/// * `current_url` - 页面当前地址
fn navigation_failure(document_failure: Option<&str>, current_url: Option<&str>) -> Option<String> {
    if let Some(error_text) = document_failure {
        return Some(error_text.to_string());
    }

    match current_url {
        Some(current) if current.starts_with(ERROR_PAGE_SCHEME) => {
            Some(format!("browser error page {}", current))
        }
        _ => None,
    }
}

/// 查找可见文本包含指定标签的按钮
async fn labelled_buttons(page: &Page, label: &str) -> Vec<Element> {
    let buttons = match page.find_elements("button").await {
        Ok(buttons) => buttons,
        Err(_) => return Vec::new(),
    };

    let mut matched = Vec::new();
    for button in buttons {
        if let Ok(Some(text)) = button.inner_text().await {
            if PopupRule::label_matches(label, &text) {
                matched.push(button);
            }
        }
    }
    matched
}

/// 整页兜底：页面 body 的可见文本
async fn body_text(page: &Page, html: &str) -> String {
    let rendered = match page.find_element("body").await {
        Ok(body) => body.inner_text().await.ok().flatten(),
        Err(_) => None,
    };

    match rendered {
        Some(text) => normalize_lines(&text),
        None => html_to_text(html),
    }
}

#[async_trait]
impl AcquisitionStrategy for RenderedEngine {
    /// 执行浏览器渲染获取
    ///
    /// 浏览器会话在返回前总是被关闭，无论渲染成功与否
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `options` - 获取选项
    ///
    /// # 返回值
    ///
    /// * `Ok(AcquiredContent)` - 渲染后定位到的内容
    /// * `Err(EngineError)` - 启动、导航或渲染过程中出现的错误
    async fn attempt(
        &self,
        url: &str,
        options: &AcquireOptions,
    ) -> Result<AcquiredContent, EngineError> {
        let start = Instant::now();
        let session = BrowserSession::launch(&self.settings, options).await?;

        let outcome = self.render(&session, url, options).await;
        session.close().await;

        if let Ok(content) = &outcome {
            info!(
                "Rendered acquisition of {} located content via {:?} in {}ms",
                url,
                content.content_selector,
                start.elapsed().as_millis()
            );
        }

        outcome
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "rendered"
    }
}

#[cfg(test)]
#[path = "rendered_engine_test.rs"]
mod tests;
