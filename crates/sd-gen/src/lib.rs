pub mod gemini;
pub mod model;

pub use crate::gemini::GeminiModel;
pub use crate::model::{ModelError, TextModel};
