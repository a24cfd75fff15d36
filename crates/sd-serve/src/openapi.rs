use utoipa::OpenApi;

use crate::routes::search::SearchQuery;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::{Json, Router};
use sd_core::types::assessment::{Assessment, AssessmentSet};
use sd_core::types::catalog::{CatalogPath, Course, PathMilestone, SkillEntry, SkillPortfolio};
use sd_core::types::dashboard::DashboardSummary;
use sd_core::types::enums::{AssessmentKind, ContentSource, Difficulty, SkillLevel};
use sd_core::types::envelope::{Generated, RequestToken};
use sd_core::types::gaps::SkillGapReport;
use sd_core::types::ids::GenerationId;
use sd_core::types::io::{AssessmentRequest, CourseFilter, GapRequest, PathRequest, SearchRequest};
use sd_core::types::path::{GeneratedPath, Milestone};
use sd_core::types::search::{CourseMatch, PathMatch, SearchResults};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::paths::generate,
        crate::routes::skills::gap_analysis,
        crate::routes::search::search,
        crate::routes::assessments::generate,
        crate::routes::catalog::list_courses,
        crate::routes::catalog::get_course,
        crate::routes::catalog::list_categories,
        crate::routes::catalog::list_paths,
        crate::routes::catalog::get_path,
        crate::routes::catalog::get_skills,
        crate::routes::dashboard::summary
    ),
    components(schemas(
        PathRequest,
        GapRequest,
        SearchRequest,
        AssessmentRequest,
        CourseFilter,
        SearchQuery,
        GeneratedPath,
        Milestone,
        SkillGapReport,
        SearchResults,
        CourseMatch,
        PathMatch,
        AssessmentSet,
        Assessment,
        Generated<GeneratedPath>,
        Generated<SkillGapReport>,
        Generated<SearchResults>,
        Generated<AssessmentSet>,
        Course,
        CatalogPath,
        PathMilestone,
        SkillEntry,
        SkillPortfolio,
        DashboardSummary,
        GenerationId,
        RequestToken,
        Difficulty,
        SkillLevel,
        AssessmentKind,
        ContentSource
    ))
)]
struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi()
        .to_json()
        .unwrap_or_else(|_| "{}".to_string())
}

pub fn ensure_initialized() {
    let _ = ApiDoc::openapi();
}

pub fn router() -> Router {
    Router::new()
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(swagger_ui))
}

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> impl IntoResponse {
    Html(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>SkillDeck API Docs</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.ui = SwaggerUIBundle({ url: '/api/openapi.json', dom_id: '#swagger-ui' });
    </script>
  </body>
</html>
"#,
    )
}
