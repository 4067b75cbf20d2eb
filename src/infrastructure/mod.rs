// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含档案存储的技术实现：
/// - 数据库（database）：主库与本地库的连接池
/// - 仓库实现（repositories）：档案仓库接口的 PostgreSQL / SQLite 实现
pub mod database;
pub mod repositories;
