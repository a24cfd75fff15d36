use crate::types::enums::Difficulty;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// AI-generated learning path. The milestone list travels under the wire
/// name `learningPath`, matching what the prompt asks the model to emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPath {
    #[serde(rename = "learningPath")]
    pub milestones: Vec<Milestone>,
    pub total_duration: String,
    pub skills_to_gain: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub duration: String,
    pub skills: Vec<String>,
    pub resources: Vec<String>,
    pub difficulty: Difficulty,
}
