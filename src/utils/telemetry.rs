// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 默认日志过滤规则，可通过 `RUST_LOG` 覆盖
pub const DEFAULT_LOG_FILTER: &str = "info,jobscout=debug";

/// 初始化日志订阅器
///
/// 日志写入 stderr，保证 CLI 输出到 stdout 的 JSON 不被污染。
/// `json` 为 true 时使用结构化 JSON 格式。
pub fn init_telemetry(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
