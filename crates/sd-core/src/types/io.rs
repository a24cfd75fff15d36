use crate::types::enums::{Difficulty, SkillLevel};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
    pub skills: Vec<String>,
    pub level: SkillLevel,
    pub goals: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GapRequest {
    pub current_skills: Vec<String>,
    pub target_role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub level: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
pub struct CourseFilter {
    /// Case-insensitive match against title, description, and skills.
    #[serde(rename = "q")]
    pub query: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}
