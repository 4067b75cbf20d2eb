// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含 API 请求的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、规则表、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 实现浏览器渲染与静态抓取两种获取策略及获取阶梯
pub mod engines;

/// 基础设施模块
///
/// 提供档案数据库的连接与仓库实现
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由和处理器
pub mod presentation;

/// 工具模块
///
/// 提供文本处理和日志初始化等辅助功能
pub mod utils;
