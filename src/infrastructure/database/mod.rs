// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库模块
///
/// 提供档案主库与本地库的连接池创建
pub mod connection;
