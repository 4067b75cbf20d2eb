// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::profile::StudentProfile;

#[derive(Error, Debug)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Invalid profile data for {user_id}: {message}")]
    InvalidData { user_id: String, message: String },
}

impl From<sqlx::Error> for ProfileRepositoryError {
    fn from(err: sqlx::Error) -> Self {
        ProfileRepositoryError::DatabaseError(err.to_string())
    }
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find a student profile by user id, `Ok(None)` when no row exists
    async fn find_by_user_id(
        &self,
        user_id: &str,
    ) -> Result<Option<StudentProfile>, ProfileRepositoryError>;

    /// Store name used in logs
    fn name(&self) -> &'static str;
}
