// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AcquisitionSettings;
use crate::domain::models::acquisition::AcquisitionResult;
use crate::domain::rules::{PopupRuleTable, SelectorTable};
use crate::engines::rendered_engine::RenderedEngine;
use crate::engines::static_engine::StaticEngine;
use crate::engines::traits::{AcquireOptions, AcquisitionStrategy, AttemptOutcome, Diagnostic};
use std::sync::Arc;
use tracing::{info, warn};

/// 内容获取器
///
/// 按顺序依次尝试各获取策略（获取阶梯）：第一个成功的策略直接返回，
/// 失败的策略只留下诊断信息。所有策略都失败时返回带有合并诊断信息的结果，
/// 从不向调用方抛出错误。每个策略每次调用只尝试一次。
pub struct Acquirer {
    /// 按优先级排列的策略
    strategies: Vec<Arc<dyn AcquisitionStrategy>>,
    /// 预览片段长度
    snippet_length: usize,
}

impl Acquirer {
    /// 使用给定策略创建获取器
    ///
    /// # 参数
    ///
    /// * `strategies` - 按优先级排列的策略列表
    /// * `snippet_length` - 预览片段长度
    pub fn new(strategies: Vec<Arc<dyn AcquisitionStrategy>>, snippet_length: usize) -> Self {
        Self {
            strategies,
            snippet_length,
        }
    }

    /// 标准获取阶梯：先浏览器渲染，失败后静态抓取
    ///
    /// 两个策略共享同一个内容定位表
    pub fn with_tables(
        settings: &AcquisitionSettings,
        selectors: Arc<SelectorTable>,
        popups: Arc<PopupRuleTable>,
    ) -> Self {
        let rendered = Arc::new(RenderedEngine::new(settings, selectors.clone(), popups));
        let fallback = Arc::new(StaticEngine::new(settings, selectors));

        Self::new(vec![rendered, fallback], settings.snippet_length)
    }

    /// 使用默认规则表创建标准获取阶梯
    pub fn from_settings(settings: &AcquisitionSettings) -> Self {
        Self::with_tables(
            settings,
            SelectorTable::job_content(),
            PopupRuleTable::common_overlays(),
        )
    }

    /// 策略名称（按尝试顺序）
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// 获取页面内容
    ///
    /// # 参数
    ///
    /// * `url` - 目标URL
    /// * `options` - 获取选项
    ///
    /// # 返回值
    ///
    /// 第一个成功策略的结果；全部失败时 `error` 为各策略诊断信息的拼接
    pub async fn acquire(&self, url: &str, options: &AcquireOptions) -> AcquisitionResult {
        let mut failures = Vec::new();

        for strategy in &self.strategies {
            let result = strategy.attempt(url, options).await;

            match AttemptOutcome::from_result(strategy.name(), result) {
                AttemptOutcome::Success(content) => {
                    info!(
                        "Acquired {} via {} strategy after {} failed attempt(s)",
                        url,
                        strategy.name(),
                        failures.len()
                    );
                    return AcquisitionResult::from_content(content, self.snippet_length);
                }
                AttemptOutcome::Failure(diagnostic) => {
                    warn!(
                        "{} strategy failed for {}: {}",
                        strategy.name(),
                        url,
                        diagnostic.message
                    );
                    failures.push(diagnostic);
                }
            }
        }

        warn!("All {} acquisition strategies failed for {}", failures.len(), url);
        AcquisitionResult::failed(Diagnostic::combine(&failures))
    }
}
