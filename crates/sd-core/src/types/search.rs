use crate::types::enums::Difficulty;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// AI search results: course and path recommendations ranked by relevance,
/// plus skill and level suggestions. Either list may be empty; consumers
/// render an explicit empty-state rather than a blank region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub courses: Vec<CourseMatch>,
    pub learning_paths: Vec<PathMatch>,
    pub recommended_skills: Vec<String>,
    pub suggested_level: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseMatch {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub skills: Vec<String>,
    /// 0..=100; enforced by the shape checker before a parsed response is
    /// accepted.
    pub relevance_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PathMatch {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub relevance_score: u8,
}
