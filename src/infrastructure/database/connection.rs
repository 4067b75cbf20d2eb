// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;

/// 创建主库（PostgreSQL）连接池
///
/// 连接在首次查询时才建立，获取连接受 `connect_timeout_secs` 限制。
///
/// # 参数
///
/// * `url` - PostgreSQL 连接URL
/// * `settings` - 数据库配置
///
/// # 返回值
///
/// * `Ok(PgPool)` - 连接池
/// * `Err(sqlx::Error)` - URL 无法解析
pub fn create_primary_pool(url: &str, settings: &DatabaseSettings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .connect_lazy(url)
}

/// 打开本地 SQLite 库，文件不存在时创建
pub async fn create_local_pool(path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
}
