pub mod assessment;
pub mod catalog;
pub mod dashboard;
pub mod enums;
pub mod envelope;
pub mod gaps;
pub mod ids;
pub mod io;
pub mod path;
pub mod search;

pub use enums::{
    AssessmentKind, ContentKind, ContentSource, Difficulty, RequestSource, SkillLevel,
};
pub use envelope::{Generated, RequestToken};
pub use ids::{GenerationId, IdError};
