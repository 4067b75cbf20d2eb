// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 教育经历
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub year: Option<i32>,
    pub institute: Option<String>,
}

/// 项目经历
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
}

/// 学生档案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<serde_json::Value>,
}

impl StudentProfile {
    /// 本地开发库的种子记录
    pub fn fixture() -> Self {
        Self {
            user_id: "sanjana01".to_string(),
            name: Some("Sanjana".to_string()),
            email: Some("sanjana@example.com".to_string()),
            education: vec![Education {
                degree: "BTech CSE".to_string(),
                year: Some(2025),
                institute: Some("XYZ".to_string()),
            }],
            projects: vec![Project {
                name: "Seismic Classifier".to_string(),
                desc: Some("P-wave vs noise using TCN".to_string()),
                tech: vec!["Python".to_string(), "TCN".to_string()],
            }],
            skills: vec![
                "Python".to_string(),
                "ML".to_string(),
                "TCN".to_string(),
                "PyTorch".to_string(),
            ],
            experience: Vec::new(),
        }
    }
}

/// 对外返回的档案视图（不含 user_id）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileView {
    pub name: Option<String>,
    pub email: Option<String>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub skills: Vec<String>,
    pub experience: Vec<serde_json::Value>,
}

impl From<StudentProfile> for ProfileView {
    fn from(profile: StudentProfile) -> Self {
        Self {
            name: profile.name,
            email: profile.email,
            education: profile.education,
            projects: profile.projects,
            skills: profile.skills,
            experience: profile.experience,
        }
    }
}
