use crate::AppState;
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use sd_core::types::dashboard::DashboardSummary;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(summary))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    responses((status = 200, body = DashboardSummary))
)]
pub(crate) async fn summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.deck.dashboard().summary())
}
