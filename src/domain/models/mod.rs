// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 内容获取结果（acquisition）：获取阶梯的输出及其来源信息
/// - 提取结果（extraction）：从页面文本分拣出的职位信息
/// - 学生档案（profile）：档案查询返回的数据结构
pub mod acquisition;
pub mod extraction;
pub mod profile;
