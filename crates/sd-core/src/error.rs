use sd_gen::ModelError;
use thiserror::Error;

/// Why a model reply was rejected before reaching the caller. Rejection
/// never surfaces; it routes the operation onto its fallback.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course not found: {id}")]
    CourseNotFound { id: String },
    #[error("path not found: {id}")]
    PathNotFound { id: String },
}

#[derive(Debug, Error)]
pub enum DeckError {
    #[error(transparent)]
    Shape(#[from] ShapeError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("internal error: {message}")]
    Internal { message: String },
}
