use crate::middleware::correlation::CorrelationId;
use crate::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Extension, Json, Router};
use sd_core::types::envelope::Generated;
use sd_core::types::io::PathRequest;
use sd_core::types::path::GeneratedPath;
use sd_core::types::RequestSource;
use sd_core::RequestContext;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/paths/generate", post(generate))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/paths/generate",
    request_body = PathRequest,
    responses((status = 200, body = Generated<GeneratedPath>))
)]
pub(crate) async fn generate(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<PathRequest>,
) -> Json<Generated<GeneratedPath>> {
    let ctx = RequestContext::new(RequestSource::Http, Some(correlation.0));
    Json(state.deck.paths().generate(&ctx, input).await)
}
