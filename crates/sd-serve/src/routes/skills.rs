use crate::middleware::correlation::CorrelationId;
use crate::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Extension, Json, Router};
use sd_core::types::envelope::Generated;
use sd_core::types::gaps::SkillGapReport;
use sd_core::types::io::GapRequest;
use sd_core::types::RequestSource;
use sd_core::RequestContext;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/skills/gap-analysis", post(gap_analysis))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/skills/gap-analysis",
    request_body = GapRequest,
    responses((status = 200, body = Generated<SkillGapReport>))
)]
pub(crate) async fn gap_analysis(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Json(input): Json<GapRequest>,
) -> Json<Generated<SkillGapReport>> {
    let ctx = RequestContext::new(RequestSource::Http, Some(correlation.0));
    Json(state.deck.skills().gap_analysis(&ctx, input).await)
}
