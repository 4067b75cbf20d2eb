// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use std::sync::Arc;

use crate::domain::services::profile_service::{ProfileLookup, ProfileService};
use crate::presentation::errors::AppError;

/// 查询学生档案
pub async fn get_profile(
    Extension(service): Extension<Arc<ProfileService>>,
    Path(user_id): Path<String>,
) -> Result<Response, AppError> {
    let lookup = service.lookup(&user_id).await?;

    let status = match lookup {
        ProfileLookup::Found { .. } => StatusCode::OK,
        ProfileLookup::Missing { .. } => StatusCode::NOT_FOUND,
    };

    Ok((status, Json(lookup)).into_response())
}
