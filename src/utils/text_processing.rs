// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 可见文本提取模块
//!
//! 将 HTML 标记转换为可见文本：
//! - 去除所有标签，跳过 script/style 等不可见元素
//! - 块级元素边界转换为换行
//! - 行内空白折叠为单个空格，去除空行

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};

/// 不产生可见文本的元素
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template", "head", "title"];

/// 块级元素，其边界在输出中表现为换行
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

/// 行内空白；换行符不在其中，文本节点里的换行保留为行边界
static INLINE_WHITESPACE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[ \t\u{00a0}\u{000c}]+").expect("whitespace pattern is valid")
});

static LINE_ENDING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r\n?").expect("line ending pattern is valid"));

/// 将 HTML 片段转换为可见文本
///
/// # 参数
///
/// * `html` - HTML 片段（例如某个元素的 inner HTML）
///
/// # 返回值
///
/// 去除标记后的文本，每个块级区域占一行
pub fn html_to_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    element_text(fragment.root_element())
}

/// 提取完整文档的可见文本
pub fn document_text(document: &Html) -> String {
    element_text(document.root_element())
}

/// 提取元素子树的可见文本
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(element, &mut raw);
    normalize_lines(&raw)
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            let text = LINE_ENDING_REGEX.replace_all(text, "\n");
            out.push_str(&INLINE_WHITESPACE_REGEX.replace_all(&text, " "));
            continue;
        }

        let Some(child_element) = ElementRef::wrap(child) else {
            continue;
        };
        let name = child_element.value().name();
        if INVISIBLE_ELEMENTS.contains(&name) {
            continue;
        }
        if name == "br" {
            out.push('\n');
            continue;
        }

        let is_block = BLOCK_ELEMENTS.contains(&name);
        if is_block {
            out.push('\n');
        }
        collect_text(child_element, out);
        if is_block {
            out.push('\n');
        }
    }
}

/// 逐行去除首尾空白并丢弃空行
pub fn normalize_lines(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// 按字符数截断文本（不会切断多字节字符）
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
