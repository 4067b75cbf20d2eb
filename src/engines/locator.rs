// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::rules::SelectorTable;
use crate::utils::text_processing::element_text;
use scraper::{Html, Selector};
use tracing::debug;

/// 定位到的内容区域
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedContent {
    /// 命中的定位规则
    pub selector: String,
    /// 区域内的可见文本
    pub text: String,
}

/// 在已解析的文档中定位职位内容
///
/// 依次尝试定位表中的规则和兜底规则，第一个匹配到可见文本非空元素的规则胜出。
/// 匹配到但内容为空的元素视同未匹配，继续尝试下一条规则。
/// 单条规则的解析失败只记录日志，不影响其它规则。
///
/// # 参数
///
/// * `document` - 已解析的 HTML 文档
/// * `table` - 内容定位表
///
/// # 返回值
///
/// 命中时返回规则与文本，否则返回 `None`
pub fn locate_in_document(document: &Html, table: &SelectorTable) -> Option<LocatedContent> {
    for rule in table.candidates() {
        let selector = match Selector::parse(&rule.selector) {
            Ok(selector) => selector,
            Err(e) => {
                debug!("Skipping unparsable content selector {}: {:?}", rule.selector, e);
                continue;
            }
        };

        let Some(element) = document.select(&selector).next() else {
            continue;
        };

        let text = element_text(element);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rules::JOB_CLASS_FALLBACK;

    #[test]
    fn test_first_rule_in_table_order_wins() {
        // `.description` appears before `main` in the table, even though `main` comes
        // first in the document.
        let document = Html::parse_document(
            r#"<html><body>
                <main>Generic main content</main>
                <div class="description">Responsibilities: build features</div>
            </body></html>"#,
        );

        let located = locate_in_document(&document, &SelectorTable::job_content()).unwrap();
        assert_eq!(located.selector, ".description");
        assert_eq!(located.text, "Responsibilities: build features");
    }

    #[test]
    fn test_semantic_container_outranks_class_conventions() {
        let document = Html::parse_document(
            r#"<html><body>
                <div class="job-description">Class based</div>
                <article>Article based</article>
            </body></html>"#,
        );

        let located = locate_in_document(&document, &SelectorTable::job_content()).unwrap();
        assert_eq!(located.selector, "article");
    }

    #[test]
    fn test_empty_match_falls_through() {
        let document = Html::parse_document(
            r#"<html><body>
                <article>   <script>track()</script> </article>
                <div class="posting-body">Real posting</div>
            </body></html>"#,
        );

        let located = locate_in_document(&document, &SelectorTable::job_content()).unwrap();
        assert_eq!(located.selector, ".posting-body");
        assert_eq!(located.text, "Real posting");
    }

    #[test]
    fn test_job_class_fallback() {
        let document = Html::parse_document(
            r#"<html><body><section class="careers-jobCard">Apply today</section></body></html>"#,
        );

        let located = locate_in_document(&document, &SelectorTable::job_content()).unwrap();
        assert_eq!(located.selector, JOB_CLASS_FALLBACK);
        assert_eq!(located.text, "Apply today");
    }

    #[test]
    fn test_job_class_on_body_is_not_a_content_match() {
        let document = Html::parse_document(
            r#"<html class="jobs-site"><body class="page-jobs">
                <nav>Home</nav>
                <div class="jobCard">Responsibilities: build features</div>
            </body></html>"#,
        );

        let located = locate_in_document(&document, &SelectorTable::job_content()).unwrap();
        assert_eq!(located.selector, JOB_CLASS_FALLBACK);
        assert_eq!(located.text, "Responsibilities: build features");
    }

    #[test]
    fn test_job_class_only_on_body_falls_through() {
        let document = Html::parse_document(
            r#"<html><body class="careers-job-page"><p>Apply today</p></body></html>"#,
        );

        assert!(locate_in_document(&document, &SelectorTable::job_content()).is_none());
    }

    #[test]
    fn test_no_match_returns_none() {
        let document =
            Html::parse_document("<html><body><div class=\"nav\">Home</div></body></html>");
        assert!(locate_in_document(&document, &SelectorTable::job_content()).is_none());
    }

    #[test]
    fn test_invalid_selector_is_skipped() {
        let table = SelectorTable::new(["div[", "p"], JOB_CLASS_FALLBACK);
        let document = Html::parse_document("<html><body><p>Para</p></body></html>");

        let located = locate_in_document(&document, &table).unwrap();
        assert_eq!(located.selector, "p");
    }
}
