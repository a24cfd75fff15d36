use crate::types::catalog::{CatalogPath, SkillEntry};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate view over the catalog: headline counters plus the skill and
/// path lists the overview page renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub skill_count: u32,
    pub average_progress: u8,
    pub advanced_skills: u32,
    pub learning_skills: u32,
    pub active_paths: u32,
    pub weekly_hours: f64,
    pub achievements: u32,
    pub skills: Vec<SkillEntry>,
    pub paths: Vec<CatalogPath>,
}
