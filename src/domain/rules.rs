// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 静态规则表
//!
//! 内容定位表（SelectorTable）、弹窗关闭规则表（PopupRuleTable）以及
//! 职位文本分类使用的关键词表。所有表在进程启动时初始化一次，之后只读。

use once_cell::sync::Lazy;
use std::sync::Arc;

/// 广义兜底定位规则：class 属性包含 "job" 的任意元素（html 与 body 除外）
pub const JOB_CLASS_FALLBACK: &str = "[class*='job']:not(html):not(body)";

/// 内容定位规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentRule {
    /// CSS 选择器
    pub selector: String,
}

impl ContentRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }
}

/// 内容定位表
///
/// 按优先级排列的定位规则，第一个匹配到非空元素的规则胜出。
/// 语义容器（article）优先于职位相关的 class/id 约定，后者优先于通用的 main 容器。
#[derive(Debug, Clone)]
pub struct SelectorTable {
    rules: Vec<ContentRule>,
    fallback: ContentRule,
}

impl SelectorTable {
    /// 使用给定规则和兜底规则创建定位表
    pub fn new<I, S>(selectors: I, fallback: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: selectors.into_iter().map(ContentRule::new).collect(),
            fallback: ContentRule::new(fallback),
        }
    }

    /// 表中的规则（不含兜底规则）
    pub fn rules(&self) -> &[ContentRule] {
        &self.rules
    }

    /// 兜底规则
    pub fn fallback(&self) -> &ContentRule {
        &self.fallback
    }

    /// 按尝试顺序返回全部候选规则：先表内规则，最后是兜底规则
    ///
    /// 渲染策略与静态策略都通过此迭代器定位内容，保证两者使用同一套定位策略。
    pub fn candidates(&self) -> impl Iterator<Item = &ContentRule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }

    /// 职位页面默认定位表
    pub fn job_content() -> Arc<SelectorTable> {
        JOB_CONTENT_SELECTORS.clone()
    }
}

static JOB_CONTENT_SELECTORS: Lazy<Arc<SelectorTable>> = Lazy::new(|| {
    Arc::new(SelectorTable::new(
        [
            "article",
            ".job-description",
            ".jobDescription",
            ".posting-body",
            ".job-posting",
            ".description",
            "#job-description",
            ".job-details",
            ".jd-section",
            "#job-content",
            ".content",
            "main",
        ],
        JOB_CLASS_FALLBACK,
    ))
});

/// 弹窗关闭规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupRule {
    /// 按 CSS 选择器匹配（class/属性匹配）
    Css(String),
    /// 匹配可见文本包含该标签的按钮（不区分大小写）
    ButtonLabel(String),
}

impl PopupRule {
    /// 判断按钮文本是否符合标签规则
    pub fn label_matches(label: &str, button_text: &str) -> bool {
        button_text
            .to_lowercase()
            .contains(&label.to_lowercase())
    }
}

impl std::fmt::Display for PopupRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PopupRule::Css(selector) => write!(f, "{}", selector),
            PopupRule::ButtonLabel(label) => write!(f, "button:has-text('{}')", label),
        }
    }
}

/// 弹窗关闭规则表
///
/// 规则之间相互独立、无顺序要求，单条规则失败不影响其它规则。
#[derive(Debug, Clone)]
pub struct PopupRuleTable {
    rules: Vec<PopupRule>,
}

impl PopupRuleTable {
    pub fn new(rules: Vec<PopupRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[PopupRule] {
        &self.rules
    }

    /// 默认的 cookie / 语言 / 遮罩层关闭规则
    pub fn common_overlays() -> Arc<PopupRuleTable> {
        COMMON_POPUP_RULES.clone()
    }
}

static COMMON_POPUP_RULES: Lazy<Arc<PopupRuleTable>> = Lazy::new(|| {
    let css = [
        "button[aria-label*='close']",
        "button[aria-label*='Close']",
        "button.cookie-accept",
        ".cookie-consent button",
        ".cookie-banner button",
        ".consent-modal button",
        ".language-selector button",
        ".language-chooser button",
        ".close-modal",
        ".overlay-close",
        ".modal-close",
    ];
    let labels = [
        "Accept",
        "I accept",
        "Agree",
        "OK",
        "Close",
        "Done",
        "Got it",
        "Allow cookies",
        "Accept all",
    ];

    let rules = css
        .into_iter()
        .map(|s| PopupRule::Css(s.to_string()))
        .chain(labels.into_iter().map(|l| PopupRule::ButtonLabel(l.to_string())))
        .collect();

    Arc::new(PopupRuleTable::new(rules))
});

/// 关键词集合，按小写子串匹配
#[derive(Debug, Clone, Copy)]
pub struct KeywordSet(&'static [&'static str]);

impl KeywordSet {
    pub const fn new(keywords: &'static [&'static str]) -> Self {
        Self(keywords)
    }

    /// 行的小写形式包含任一关键词即匹配
    pub fn matches(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.0.iter().any(|keyword| lower.contains(keyword))
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        self.0
    }
}

/// 职责描述
pub const RESPONSIBILITY_KEYWORDS: KeywordSet =
    KeywordSet::new(&["responsib", "you will", "we are looking", "role:"]);

/// 任职要求
pub const QUALIFICATION_KEYWORDS: KeywordSet = KeywordSet::new(&[
    "qualif",
    "requirement",
    "must have",
    "preferred",
    "bachelor",
    "degree",
]);

/// 技能/技术栈行
pub const SKILL_KEYWORDS: KeywordSet =
    KeywordSet::new(&["skills", "technolog", "tech stack", "requirements:"]);

/// 技能兜底：常见技术名称
pub const TECHNOLOGY_TOKENS: KeywordSet = KeywordSet::new(&[
    "python",
    "java",
    "sql",
    "docker",
    "aws",
    "react",
    "node",
    "tensorflow",
    "pytorch",
]);
