// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::extraction_service::ExtractionService;
use crate::domain::services::profile_service::ProfileService;
use crate::presentation::handlers::{extract_handler, profile_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `extraction` - 提取服务
/// * `profiles` - 档案服务
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(extraction: Arc<ExtractionService>, profiles: Arc<ProfileService>) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route("/v1/extract", post(extract_handler::extract))
        .route("/v1/acquire", post(extract_handler::acquire))
        .route("/v1/profiles/{user_id}", get(profile_handler::get_profile));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(Extension(extraction))
        .layer(Extension(profiles))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
