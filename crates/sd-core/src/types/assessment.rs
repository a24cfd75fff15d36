use crate::types::enums::{AssessmentKind, Difficulty};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssessmentSet {
    pub assessments: Vec<Assessment>,
}

/// One generated assessment. `id` is whatever key the model (or fallback)
/// chose; it only has to be non-empty and is never resolved against
/// anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub skills_evaluated: Vec<String>,
    pub question_count: u32,
    #[serde(rename = "type")]
    pub kind: AssessmentKind,
}
