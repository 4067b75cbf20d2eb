// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AcquisitionSettings;
use crate::domain::models::acquisition::AcquisitionResult;
use crate::domain::models::extraction::{ExtractionResult, JobPosting};
use crate::domain::rules::{
    KeywordSet, QUALIFICATION_KEYWORDS, RESPONSIBILITY_KEYWORDS, SKILL_KEYWORDS,
    TECHNOLOGY_TOKENS,
};
use crate::engines::router::Acquirer;
use crate::engines::traits::AcquireOptions;
use tracing::{debug, info};

/// 职责与要求分类的行数上限
pub const BUCKET_LIMIT: usize = 25;

/// 提取服务
///
/// 负责获取职位页面并从其文本中分拣出职责、要求和技能
pub struct ExtractionService {
    acquirer: Acquirer,
    options: AcquireOptions,
}

impl ExtractionService {
    /// 使用默认获取选项（有窗口、30 秒超时）创建提取服务
    pub fn new(acquirer: Acquirer) -> Self {
        Self::with_options(acquirer, AcquireOptions::default())
    }

    /// 根据获取配置创建标准获取阶梯与默认选项
    pub fn from_settings(settings: &AcquisitionSettings) -> Self {
        Self::with_options(
            Acquirer::from_settings(settings),
            AcquireOptions::from_settings(settings),
        )
    }

    pub fn with_options(acquirer: Acquirer, options: AcquireOptions) -> Self {
        Self { acquirer, options }
    }

    pub fn acquirer(&self) -> &Acquirer {
        &self.acquirer
    }

    pub fn options(&self) -> &AcquireOptions {
        &self.options
    }

    /// 提取职位信息
    ///
    /// # 参数
    ///
    /// * `url` - 职位页面地址
    ///
    /// # 返回值
    ///
    /// 提取结果；获取失败时为 `scrape_failed` 及完整诊断信息
    pub async fn extract(&self, url: &str) -> ExtractionResult {
        self.extract_with_options(url, &self.options).await
    }

    /// 使用指定获取选项提取职位信息
    pub async fn extract_with_options(&self, url: &str, options: &AcquireOptions) -> ExtractionResult {
        let acquisition = self.acquirer.acquire(url, options).await;
        let result = Self::extract_from_acquisition(&acquisition);

        if let Some(posting) = result.posting() {
            info!(
                "Extracted {} responsibilities, {} qualifications, {} skills from {}",
                posting.responsibilities.len(),
                posting.qualifications.len(),
                posting.skills.len(),
                url
            );
        }

        result
    }

    /// 从获取结果中提取职位信息（纯函数，无 I/O）
    pub fn extract_from_acquisition(acquisition: &AcquisitionResult) -> ExtractionResult {
        if let Some(diagnostic) = acquisition.error() {
            return ExtractionResult::scrape_failed(diagnostic);
        }

        let lines = content_lines(acquisition.text());

        ExtractionResult::Extracted(JobPosting {
            responsibilities: matching_lines(&lines, RESPONSIBILITY_KEYWORDS, Some(BUCKET_LIMIT)),
            qualifications: matching_lines(&lines, QUALIFICATION_KEYWORDS, Some(BUCKET_LIMIT)),
            skills: skill_lines(&lines),
            snippet: acquisition.snippet().to_string(),
            source: acquisition.source().label().map(str::to_string),
        })
    }
}

/// 拆分为去除首尾空白的非空行，保持原有顺序
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn matching_lines(lines: &[&str], keywords: KeywordSet, limit: Option<usize>) -> Vec<String> {
    lines
        .iter()
        .filter(|line| keywords.matches(line))
        .take(limit.unwrap_or(usize::MAX))
        .map(|line| line.to_string())
        .collect()
}

/// 技能行：先按技能关键词匹配，结果为空时才按常见技术名称兜底
fn skill_lines(lines: &[&str]) -> Vec<String> {
    let skills = matching_lines(lines, SKILL_KEYWORDS, None);
    if !skills.is_empty() {
        return skills;
    }

    debug!("No skills keyword lines, scanning for technology names");
    matching_lines(lines, TECHNOLOGY_TOKENS, None)
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
