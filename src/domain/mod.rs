// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：获取结果、提取结果和学生档案
/// - 规则表（rules）：内容定位、弹窗关闭和关键词分类规则
/// - 仓库接口（repositories）：档案存储抽象接口
/// - 服务（services）：提取与档案查询
pub mod models;
pub mod repositories;
pub mod rules;
pub mod services;
