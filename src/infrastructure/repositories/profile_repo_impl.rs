// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgPool;
use sqlx::sqlite::SqlitePool;
use sqlx::types::Json;
use std::path::PathBuf;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::domain::{
    models::profile::StudentProfile,
    repositories::profile_repository::{ProfileRepository, ProfileRepositoryError},
};
use crate::infrastructure::database::connection::create_local_pool;

/// 将存储的 JSON 文档解析为档案，文档中缺少 `user_id` 时使用主键补齐
fn parse_profile(user_id: &str, mut data: Value) -> Result<StudentProfile, ProfileRepositoryError> {
    if let Value::Object(map) = &mut data {
        map.entry("user_id")
            .or_insert_with(|| Value::String(user_id.to_string()));
    }

    serde_json::from_value(data).map_err(|e| ProfileRepositoryError::InvalidData {
        user_id: user_id.to_string(),
        message: e.to_string(),
    })
}

/// PostgreSQL 档案仓库（主库）
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<StudentProfile>, ProfileRepositoryError> {
        let row: Option<(Json<Value>,)> =
            sqlx::query_as("SELECT data FROM students WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|(Json(data),)| parse_profile(user_id, data))
            .transpose()
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

/// 本地 SQLite 档案仓库（开发兜底库）
///
/// 首次使用时打开数据库文件、建表并写入种子档案
pub struct SqliteProfileRepository {
    path: PathBuf,
    pool: OnceCell<SqlitePool>,
}

impl SqliteProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pool: OnceCell::new(),
        }
    }

    async fn pool(&self) -> Result<&SqlitePool, ProfileRepositoryError> {
        self.pool
            .get_or_try_init(|| async {
                let pool = create_local_pool(&self.path).await?;
                initialize_local_store(&pool).await?;
                info!("Local profile store ready at {}", self.path.display());
                Ok::<_, ProfileRepositoryError>(pool)
            })
            .await
    }
}

async fn initialize_local_store(pool: &SqlitePool) -> Result<(), ProfileRepositoryError> {
    sqlx::query("CREATE TABLE IF NOT EXISTS students (user_id TEXT PRIMARY KEY, data TEXT)")
        .execute(pool)
        .await?;

    let fixture = StudentProfile::fixture();
    let data = serde_json::to_string(&fixture)
        .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

    let seeded = sqlx::query("INSERT OR IGNORE INTO students (user_id, data) VALUES (?, ?)")
        .bind(&fixture.user_id)
        .bind(data)
        .execute(pool)
        .await?;
    debug!("Seeded {} fixture profile(s)", seeded.rows_affected());

    Ok(())
}

#[async_trait]
impl ProfileRepository for SqliteProfileRepository {
    async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<StudentProfile>, ProfileRepositoryError> {
        let pool = self.pool().await?;

        let row: Option<(String,)> = sqlx::query_as("SELECT data FROM students WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        match row {
            Some((raw,)) => {
                let data: Value = serde_json::from_str(&raw).map_err(|e| {
                    ProfileRepositoryError::InvalidData {
                        user_id: user_id.to_string(),
                        message: e.to_string(),
                    }
                })?;
                parse_profile(user_id, data).map(Some)
            }
            None => Ok(None),
        }
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}
