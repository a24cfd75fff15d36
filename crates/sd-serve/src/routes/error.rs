use axum::http::StatusCode;
use axum::Json;
use sd_core::error::{CatalogError, DeckError, ShapeError};
use sd_gen::ModelError;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub code: &'static str,
    pub message: String,
    pub correlation_id: Option<String>,
}

/// Maps a core error onto a wire status and envelope. Generation endpoints
/// repair failures internally and answer 200, so in practice only catalog
/// lookups reach this with anything but an internal error; the mapping
/// stays total anyway.
pub fn map_error(
    err: &DeckError,
    correlation_id: Option<String>,
) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code, message) = match err {
        DeckError::Catalog(catalog) => map_catalog_error(catalog),
        DeckError::Shape(shape) => map_shape_error(shape),
        DeckError::Model(model) => map_model_error(model),
        DeckError::Internal { message } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal_error",
            message.clone(),
        ),
    };

    (
        status,
        Json(ErrorEnvelope {
            code,
            message,
            correlation_id,
        }),
    )
}

fn map_catalog_error(err: &CatalogError) -> (StatusCode, &'static str, String) {
    match err {
        CatalogError::CourseNotFound { .. } | CatalogError::PathNotFound { .. } => {
            (StatusCode::NOT_FOUND, "not_found", err.to_string())
        }
    }
}

fn map_shape_error(err: &ShapeError) -> (StatusCode, &'static str, String) {
    match err {
        ShapeError::Json(_) | ShapeError::Invalid { .. } => {
            (StatusCode::BAD_REQUEST, "invalid_input", err.to_string())
        }
    }
}

fn map_model_error(err: &ModelError) -> (StatusCode, &'static str, String) {
    match err {
        ModelError::Http(inner) if inner.is_timeout() => {
            (StatusCode::GATEWAY_TIMEOUT, "timeout", err.to_string())
        }
        ModelError::Unconfigured
        | ModelError::Http(_)
        | ModelError::Status { .. }
        | ModelError::EmptyResponse => (
            StatusCode::SERVICE_UNAVAILABLE,
            "provider_unavailable",
            err.to_string(),
        ),
    }
}
