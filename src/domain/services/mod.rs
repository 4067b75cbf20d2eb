// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 提取服务（extraction_service）：获取职位页面并按关键词分拣内容
/// - 档案服务（profile_service）：主库优先、本地库兜底的学生档案查询
pub mod extraction_service;
pub mod profile_service;
