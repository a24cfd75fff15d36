use crate::types::enums::{Difficulty, SkillLevel};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub rating: f64,
    pub enrolled: u32,
    pub skills: Vec<String>,
    pub category: String,
    pub price: f64,
    pub progress: u8,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub milestones: Vec<PathMilestone>,
    pub total_duration: String,
    pub difficulty: Difficulty,
    pub progress: u8,
    pub skills_to_gain: Vec<String>,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathMilestone {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub difficulty: Difficulty,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillEntry {
    pub id: String,
    pub name: String,
    pub level: SkillLevel,
    pub category: String,
    pub progress: u8,
}

/// The tracked skill set together with the role those skills are
/// measured against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillPortfolio {
    pub skills: Vec<SkillEntry>,
    pub target_role: String,
}
