// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;
use tracing::info;

use crate::application::dto::extract_request::ExtractRequestDto;
use crate::domain::models::acquisition::AcquisitionResult;
use crate::domain::models::extraction::ExtractionResult;
use crate::domain::services::extraction_service::ExtractionService;
use crate::presentation::errors::AppError;

fn validate(payload: &ExtractRequestDto) -> Result<(), AppError> {
    if payload.url.trim().is_empty() {
        return Err(AppError::bad_request("url cannot be empty"));
    }
    Ok(())
}

/// 提取职位信息
///
/// 获取失败也返回 200，失败信息包含在结果中
pub async fn extract(
    Extension(service): Extension<Arc<ExtractionService>>,
    Json(payload): Json<ExtractRequestDto>,
) -> Result<Json<ExtractionResult>, AppError> {
    validate(&payload)?;

    let options = payload.options(service.options());
    info!("Extract request for {}", payload.url);

    let result = service.extract_with_options(payload.url.trim(), &options).await;
    Ok(Json(result))
}

/// 获取页面内容（不做分拣），用于诊断
pub async fn acquire(
    Extension(service): Extension<Arc<ExtractionService>>,
    Json(payload): Json<ExtractRequestDto>,
) -> Result<Json<AcquisitionResult>, AppError> {
    validate(&payload)?;

    let options = payload.options(service.options());
    info!("Acquire request for {}", payload.url);

    let result = service
        .acquirer()
        .acquire(payload.url.trim(), &options)
        .await;
    Ok(Json(result))
}
