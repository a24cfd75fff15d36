pub mod assessments;
pub mod catalog;
pub mod dashboard;
pub mod error;
pub mod paths;
pub mod search;
pub mod skills;

use crate::middleware::correlation::correlation_middleware;
use crate::{openapi, static_files, AppState};
use axum::middleware;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(paths::router(state.clone()))
        .merge(skills::router(state.clone()))
        .merge(search::router(state.clone()))
        .merge(assessments::router(state.clone()))
        .merge(catalog::router(state.clone()))
        .merge(dashboard::router(state))
        .merge(openapi::router())
        .layer(CorsLayer::permissive())
        .route_layer(middleware::from_fn(correlation_middleware));

    Router::new()
        .nest("/api", api)
        .fallback(static_files::handler)
        .layer(TraceLayer::new_for_http())
}
