use crate::middleware::correlation::CorrelationId;
use crate::AppState;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Extension, Json, Router};
use sd_core::types::envelope::Generated;
use sd_core::types::io::SearchRequest;
use sd_core::types::search::SearchResults;
use sd_core::types::RequestSource;
use sd_core::RequestContext;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, serde::Deserialize, ToSchema, IntoParams)]
pub struct SearchQuery {
    q: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQuery),
    responses((status = 200, body = Generated<SearchResults>))
)]
pub(crate) async fn search(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Query(query): Query<SearchQuery>,
) -> Json<Generated<SearchResults>> {
    let ctx = RequestContext::new(RequestSource::Http, Some(correlation.0));
    let request = SearchRequest { query: query.q };
    Json(state.deck.search().query(&ctx, request).await)
}
