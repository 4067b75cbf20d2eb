// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 提取失败类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionErrorKind {
    /// 所有获取策略均失败
    ScrapeFailed,
}

/// 从页面文本中分拣出的职位信息
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    /// 职责描述行（最多 25 行）
    pub responsibilities: Vec<String>,
    /// 任职要求行（最多 25 行）
    pub qualifications: Vec<String>,
    /// 技能行（不限数量）
    pub skills: Vec<String>,
    /// 内容预览片段
    pub snippet: String,
    /// 内容来源
    pub source: Option<String>,
}

/// 职位信息提取结果
///
/// 失败时序列化为只包含 `error` 与 `detail` 的对象，
/// 调用方只需检查 `error` 字段即可分支处理。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractionResult {
    /// 获取失败
    Failed {
        error: ExtractionErrorKind,
        detail: String,
    },
    /// 提取成功
    Extracted(JobPosting),
}

impl ExtractionResult {
    pub fn scrape_failed(detail: impl Into<String>) -> Self {
        ExtractionResult::Failed {
            error: ExtractionErrorKind::ScrapeFailed,
            detail: detail.into(),
        }
    }

    pub fn error(&self) -> Option<ExtractionErrorKind> {
        match self {
            ExtractionResult::Failed { error, .. } => Some(*error),
            ExtractionResult::Extracted(_) => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            ExtractionResult::Failed { detail, .. } => Some(detail),
            ExtractionResult::Extracted(_) => None,
        }
    }

    pub fn posting(&self) -> Option<&JobPosting> {
        match self {
            ExtractionResult::Extracted(posting) => Some(posting),
            ExtractionResult::Failed { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failed_result_has_only_error_and_detail() {
        let result = ExtractionResult::scrape_failed("rendered_error:\nx\n\nstatic_error:\ny");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({
                "error": "scrape_failed",
                "detail": "rendered_error:\nx\n\nstatic_error:\ny"
            })
        );
    }

    #[test]
    fn test_extracted_result_round_trips_through_json() {
        let result = ExtractionResult::Extracted(JobPosting {
            responsibilities: vec!["You will ship".to_string()],
            qualifications: vec![],
            skills: vec!["Skills: Rust".to_string()],
            snippet: "You will ship".to_string(),
            source: Some("static".to_string()),
        });

        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("error").is_none());
        assert_eq!(value["source"], "static");

        let back: ExtractionResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
    }
}
