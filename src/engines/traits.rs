// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AcquisitionSettings;
use crate::domain::models::acquisition::AcquiredContent;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 浏览器会话启动失败
    #[error("Browser launch failed: {0}")]
    BrowserLaunch(String),
    /// 页面导航或渲染失败
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// 导航超时
    #[error("Navigation timed out after {0:?}")]
    Timeout(Duration),
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 响应
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 失败分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 渲染策略无法加载或渲染页面（含超时）
    Navigation,
    /// 静态策略请求失败或返回错误状态码
    Fetch,
}

impl EngineError {
    /// 错误所属的失败分类
    pub fn kind(&self) -> FailureKind {
        match self {
            EngineError::RequestFailed(_) | EngineError::HttpStatus(_) => FailureKind::Fetch,
            EngineError::BrowserLaunch(_)
            | EngineError::Navigation(_)
            | EngineError::Timeout(_)
            | EngineError::Other(_) => FailureKind::Navigation,
        }
    }
}

impl From<chromiumoxide::error::CdpError> for EngineError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        EngineError::Navigation(err.to_string())
    }
}

/// 获取选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquireOptions {
    /// 渲染策略是否以无窗口模式运行
    pub headless: bool,
    /// 渲染策略的导航等待上限
    pub timeout: Duration,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        Self {
            headless: false,
            timeout: Duration::from_secs(30),
        }
    }
}

impl AcquireOptions {
    /// 使用配置中的无窗口开关与导航超时
    pub fn from_settings(settings: &AcquisitionSettings) -> Self {
        Self {
            headless: settings.headless,
            timeout: Duration::from_secs(settings.navigation_timeout_secs),
        }
    }
}

/// 单个策略失败的诊断信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 失败的策略名称
    pub strategy: &'static str,
    /// 失败分类
    pub kind: FailureKind,
    /// 错误详情
    pub message: String,
}

impl Diagnostic {
    pub fn new(strategy: &'static str, error: &EngineError) -> Self {
        Self {
            strategy,
            kind: error.kind(),
            message: format!("{:?}: {}", error.kind(), error),
        }
    }

    /// 将多个策略的诊断信息拼接为一条完整记录
    pub fn combine(diagnostics: &[Diagnostic]) -> String {
        diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_error:\n{}", self.strategy, self.message)
    }
}

/// 单次策略尝试的结果
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// 获取成功
    Success(AcquiredContent),
    /// 获取失败，保留诊断信息
    Failure(Diagnostic),
}

impl AttemptOutcome {
    /// 将策略返回值转换为尝试结果
    pub fn from_result(strategy: &'static str, result: Result<AcquiredContent, EngineError>) -> Self {
        match result {
            Ok(content) => AttemptOutcome::Success(content),
            Err(err) => AttemptOutcome::Failure(Diagnostic::new(strategy, &err)),
        }
    }
}

/// 内容获取策略特质
#[async_trait]
pub trait AcquisitionStrategy: Send + Sync {
    /// 尝试获取页面内容
    ///
    /// 任何失败都以 `Err` 返回，由获取阶梯转入下一个策略
    async fn attempt(
        &self,
        url: &str,
        options: &AcquireOptions,
    ) -> Result<AcquiredContent, EngineError>;

    /// 策略名称，用于日志与诊断信息
    fn name(&self) -> &'static str;
}
