use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use sd_core::types::catalog::{CatalogPath, Course, SkillPortfolio};
use sd_core::types::io::CourseFilter;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/catalog/courses", get(list_courses))
        .route("/catalog/courses/{id}", get(get_course))
        .route("/catalog/categories", get(list_categories))
        .route("/catalog/paths", get(list_paths))
        .route("/catalog/paths/{id}", get(get_path))
        .route("/catalog/skills", get(get_skills))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/catalog/courses",
    params(CourseFilter),
    responses((status = 200, body = Vec<Course>))
)]
pub(crate) async fn list_courses(
    State(state): State<AppState>,
    Query(filter): Query<CourseFilter>,
) -> Json<Vec<Course>> {
    Json(state.deck.catalog().courses(&filter))
}

#[utoipa::path(
    get,
    path = "/api/catalog/courses/{id}",
    params(("id" = String, Path, description = "Course ID")),
    responses((status = 200, body = Course))
)]
pub(crate) async fn get_course(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    match state.deck.catalog().course(&id) {
        Ok(course) => Json(course).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/catalog/categories",
    responses((status = 200, body = Vec<String>))
)]
pub(crate) async fn list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.deck.catalog().categories())
}

#[utoipa::path(
    get,
    path = "/api/catalog/paths",
    responses((status = 200, body = Vec<CatalogPath>))
)]
pub(crate) async fn list_paths(State(state): State<AppState>) -> Json<Vec<CatalogPath>> {
    Json(state.deck.catalog().paths())
}

#[utoipa::path(
    get,
    path = "/api/catalog/paths/{id}",
    params(("id" = String, Path, description = "Learning path ID")),
    responses((status = 200, body = CatalogPath))
)]
pub(crate) async fn get_path(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Path(id): Path<String>,
) -> Response {
    match state.deck.catalog().path(&id) {
        Ok(path) => Json(path).into_response(),
        Err(err) => map_error(&err, Some(correlation.0)).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/catalog/skills",
    responses((status = 200, body = SkillPortfolio))
)]
pub(crate) async fn get_skills(State(state): State<AppState>) -> Json<SkillPortfolio> {
    Json(state.deck.catalog().skills())
}
