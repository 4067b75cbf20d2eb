// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::DatabaseSettings;
use crate::domain::models::profile::{ProfileView, StudentProfile};
use crate::domain::repositories::profile_repository::{ProfileRepository, ProfileRepositoryError};
use crate::infrastructure::database::connection::create_primary_pool;
use crate::infrastructure::repositories::profile_repo_impl::{
    PostgresProfileRepository, SqliteProfileRepository,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Student not found: {0}")]
    NotFound(String),
    #[error("Profile store error: {0}")]
    Store(#[from] ProfileRepositoryError),
}

/// 档案查询的对外响应
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProfileLookup {
    Found { student_profile: ProfileView },
    Missing { error: String },
}

/// 档案服务
///
/// 先查主库；主库任何故障都静默退回本地库，主库明确没有记录时直接返回未找到
pub struct ProfileService {
    primary: Option<Arc<dyn ProfileRepository>>,
    local: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(
        primary: Option<Arc<dyn ProfileRepository>>,
        local: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self { primary, local }
    }

    /// 根据数据库配置创建档案服务
    ///
    /// 默认连接本机主库；主库 URL 为空或无法解析时按未配置处理
    pub fn from_settings(settings: &DatabaseSettings) -> Self {
        let primary = settings.primary_url().and_then(|url| {
            match create_primary_pool(url, settings) {
                Ok(pool) => Some(
                    Arc::new(PostgresProfileRepository::new(pool)) as Arc<dyn ProfileRepository>
                ),
                Err(e) => {
                    warn!("Ignoring unusable primary profile store URL: {}", e);
                    None
                }
            }
        });
        let local = Arc::new(SqliteProfileRepository::new(&settings.local_path));

        Self::new(primary, local)
    }

    /// 查询学生档案
    ///
    /// # 参数
    ///
    /// * `user_id` - 学生ID
    ///
    /// # 返回值
    ///
    /// * `Ok(StudentProfile)` - 找到的档案
    /// * `Err(ProfileError::NotFound)` - 档案不存在
    /// * `Err(ProfileError::Store)` - 本地库也不可用
    pub async fn get_profile(&self, user_id: &str) -> Result<StudentProfile, ProfileError> {
        if let Some(primary) = &self.primary {
            match primary.find_by_user_id(user_id).await {
                Ok(Some(profile)) => return Ok(profile),
                Ok(None) => return Err(ProfileError::NotFound(user_id.to_string())),
                Err(e) => warn!(
                    "{} profile store unavailable, falling back to {}: {}",
                    primary.name(),
                    self.local.name(),
                    e
                ),
            }
        } else {
            debug!("No primary profile store configured, using {}", self.local.name());
        }

        self.local
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| ProfileError::NotFound(user_id.to_string()))
    }

    /// 查询档案并包装为对外响应
    pub async fn lookup(&self, user_id: &str) -> Result<ProfileLookup, ProfileError> {
        match self.get_profile(user_id).await {
            Ok(profile) => Ok(ProfileLookup::Found {
                student_profile: profile.into(),
            }),
            Err(ProfileError::NotFound(_)) => Ok(ProfileLookup::Missing {
                error: "Student not found".to_string(),
            }),
            Err(e) => Err(e),
        }
    }
}
