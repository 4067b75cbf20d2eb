// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::AcquireOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 提取/获取请求
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExtractRequestDto {
    pub url: String,
    #[serde(default)]
    pub headless: Option<bool>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ExtractRequestDto {
    /// 请求中未指定的选项取默认值
    pub fn options(&self, defaults: &AcquireOptions) -> AcquireOptions {
        AcquireOptions {
            headless: self.headless.unwrap_or(defaults.headless),
            timeout: self
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}
