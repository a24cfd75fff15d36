use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Difficulty band used by generated content and the course catalog.
/// Lowercase on the wire ("beginner", "intermediate", "advanced").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Proficiency band for the skill portfolio. Superset of [`Difficulty`];
/// expert exists only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }
}

/// Assessment delivery format. Kebab-case on the wire, carried in a field
/// named `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentKind {
    MultipleChoice,
    Coding,
    Project,
}

impl AssessmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple-choice",
            Self::Coding => "coding",
            Self::Project => "project",
        }
    }
}

/// Provenance of a provider result: whether the content came back from the
/// generative model or from the deterministic fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    Generated,
    Fallback,
}

/// Which of the four provider operations a request belongs to. Token
/// sequences are scoped by kind so one widget's refresh never invalidates
/// another's in-flight call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    LearningPath,
    SkillGaps,
    Search,
    Assessments,
}

impl ContentKind {
    pub const ALL: [Self; 4] = [
        Self::LearningPath,
        Self::SkillGaps,
        Self::Search,
        Self::Assessments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::LearningPath => "learning-path",
            Self::SkillGaps => "skill-gaps",
            Self::Search => "search",
            Self::Assessments => "assessments",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::LearningPath => 0,
            Self::SkillGaps => 1,
            Self::Search => 2,
            Self::Assessments => 3,
        }
    }
}

/// Where a request entered the system. Logged alongside the correlation id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub enum RequestSource {
    Http,
    Cli,
}
