pub mod assessments;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod generate;
pub mod paths;
pub mod search;
pub mod skilldeck;
pub mod skills;
pub mod tokens;
pub mod validation;

pub mod types;

pub use crate::error::DeckError;
pub use crate::generate::ContentRequest;
pub use crate::skilldeck::{RequestContext, SkillDeck};
