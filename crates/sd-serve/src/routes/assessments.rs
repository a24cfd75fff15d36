use crate::middleware::correlation::CorrelationId;
use crate::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Extension, Json, Router};
use sd_core::types::assessment::AssessmentSet;
use sd_core::types::envelope::Generated;
use sd_core::types::io::AssessmentRequest;
use sd_core::types::RequestSource;
use sd_core::RequestContext;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/assessments/generate", post(generate))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/assessments/generate",
    request_body = AssessmentRequest,
    responses((status = 200, body = Generated<AssessmentSet>))
)]
pub(crate) async fn generate(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<AssessmentRequest>,
) -> Json<Generated<AssessmentSet>> {
    let ctx = RequestContext::new(RequestSource::Http, Some(correlation.0));
    Json(state.deck.assessments().generate(&ctx, input).await)
}
