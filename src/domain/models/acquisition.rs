// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::text_processing::truncate_chars;
use serde::{Deserialize, Serialize};

/// 内容来源
///
/// 标识由哪一种获取策略产生了内容
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// 浏览器渲染策略
    Rendered,
    /// 静态 HTTP 抓取策略
    Static,
    /// 所有策略均失败
    None,
}

impl ContentSource {
    /// 来源标签，`None` 没有标签
    pub fn label(&self) -> Option<&'static str> {
        match self {
            ContentSource::Rendered => Some("rendered"),
            ContentSource::Static => Some("static"),
            ContentSource::None => None,
        }
    }
}

/// 单个策略成功获取的内容
#[derive(Debug, Clone, PartialEq)]
pub struct AcquiredContent {
    /// 可见文本
    pub text: String,
    /// 完整页面 HTML
    pub html: String,
    /// 产生内容的策略
    pub source: ContentSource,
    /// 主文档 HTTP 状态码
    pub http_status: Option<u16>,
    /// 命中的定位规则，整页兜底时为空
    pub content_selector: Option<String>,
}

/// 内容获取结果
///
/// 每次获取产生一个实例，构造后不可变。要么 `error` 有值，
/// 要么 `text`/`html` 有效。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcquisitionResult {
    text: String,
    html: String,
    snippet: String,
    source: ContentSource,
    http_status: Option<u16>,
    error: Option<String>,
    content_selector: Option<String>,
}

impl AcquisitionResult {
    /// 根据成功获取的内容创建结果
    ///
    /// # 参数
    ///
    /// * `content` - 策略获取到的内容
    /// * `snippet_length` - 预览片段的字符数上限
    pub fn from_content(content: AcquiredContent, snippet_length: usize) -> Self {
        let snippet = truncate_chars(&content.text, snippet_length);
        Self {
            text: content.text,
            html: content.html,
            snippet,
            source: content.source,
            http_status: content.http_status,
            error: None,
            content_selector: content.content_selector,
        }
    }

    /// 创建全部策略失败的结果
    ///
    /// # 参数
    ///
    /// * `diagnostic` - 合并后的各策略失败诊断信息
    pub fn failed(diagnostic: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            html: String::new(),
            snippet: String::new(),
            source: ContentSource::None,
            http_status: None,
            error: Some(diagnostic.into()),
            content_selector: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn source(&self) -> ContentSource {
        self.source
    }

    pub fn http_status(&self) -> Option<u16> {
        self.http_status
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn content_selector(&self) -> Option<&str> {
        self.content_selector.as_deref()
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}
