use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use sd_gen::GeminiModel;
use sd_serve::{app, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

// No api key configured, so every generation request takes the fallback
// path without touching the network.
fn test_app() -> Router {
    app(AppState::new(GeminiModel::new("", "gemini-2.0-flash")))
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn search_serves_deterministic_fallback() {
    let response = test_app()
        .oneshot(get("/api/search?q=Python"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["source"], "fallback");
    assert!(body["id"].as_str().unwrap().starts_with("gen_"));

    let courses = body["content"]["courses"].as_array().unwrap();
    assert_eq!(courses[0]["title"], "Introduction to Python");
    assert_eq!(courses[0]["relevanceScore"], 95);
    assert_eq!(courses[1]["title"], "Advanced Python Techniques");
    assert_eq!(courses[1]["relevanceScore"], 88);
    assert_eq!(
        body["content"]["learningPaths"][0]["title"],
        "Python Mastery Path"
    );
}

#[tokio::test]
async fn path_generation_answers_ok_with_three_milestones() {
    let request = post(
        "/api/paths/generate",
        &json!({"skills": ["Rust"], "level": "beginner", "goals": ["Systems Programming"]}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["token"], 1);

    let milestones = body["content"]["learningPath"].as_array().unwrap();
    assert_eq!(milestones.len(), 3);
    assert_eq!(milestones[0]["title"], "Foundation Building");
    assert_eq!(body["content"]["totalDuration"], "9-13 weeks");

    let gains = body["content"]["skillsToGain"].as_array().unwrap();
    assert!(gains.contains(&json!("Rust")));
    assert!(gains.contains(&json!("Systems Programming")));
}

#[tokio::test]
async fn gap_analysis_reports_partial_readiness() {
    let request = post(
        "/api/skills/gap-analysis",
        &json!({"currentSkills": ["React", "CSS"], "targetRole": "Frontend Architect"}),
    );
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["content"]["overallReadiness"], "65%");
    assert_eq!(
        body["content"]["relevantSkills"],
        json!(["React", "CSS"])
    );
}

#[tokio::test]
async fn assessments_carry_requested_level() {
    let request = post("/api/assessments/generate", &json!({"level": "advanced"}));
    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let assessments = body["content"]["assessments"].as_array().unwrap();
    assert_eq!(assessments.len(), 3);
    for assessment in assessments {
        assert_eq!(assessment["difficulty"], "advanced");
    }
    assert_eq!(assessments[0]["id"], "prog-basics");
}

#[tokio::test]
async fn course_lookup_succeeds_and_missing_id_is_not_found() {
    let app = test_app();

    let response = app.clone().oneshot(get("/api/catalog/courses/3")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["completed"], true);

    let response = app.oneshot(get("/api/catalog/courses/99")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["code"], "not_found");
    assert!(body["correlationId"].as_str().unwrap().starts_with("corr_"));
}

#[tokio::test]
async fn course_filters_narrow_the_list() {
    let app = test_app();

    let response = app.clone().oneshot(get("/api/catalog/courses?q=react")).await.unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(get("/api/catalog/courses?category=Data%20Science"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let response = app
        .oneshot(get("/api/catalog/courses?difficulty=advanced"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn correlation_id_round_trips() {
    let request = Request::builder()
        .uri("/api/dashboard")
        .header("x-correlation-id", "corr_test_123")
        .body(Body::empty())
        .unwrap();
    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-correlation-id").unwrap(),
        "corr_test_123"
    );

    let response = test_app().oneshot(get("/api/dashboard")).await.unwrap();
    let generated = response
        .headers()
        .get("x-correlation-id")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(generated.starts_with("corr_"));
}

#[tokio::test]
async fn tokens_increase_across_requests() {
    let app = test_app();

    let first = app.clone().oneshot(get("/api/search?q=a")).await.unwrap();
    let second = app.oneshot(get("/api/search?q=b")).await.unwrap();

    assert_eq!(body_json(first).await["token"], 1);
    assert_eq!(body_json(second).await["token"], 2);
}

#[tokio::test]
async fn dashboard_summarizes_the_catalog() {
    let response = test_app().oneshot(get("/api/dashboard")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["skillCount"], 6);
    assert_eq!(body["averageProgress"], 58);
    assert_eq!(body["activePaths"], 1);
    assert_eq!(body["weeklyHours"], 12.5);
    assert_eq!(body["achievements"], 8);
}

#[tokio::test]
async fn openapi_document_is_served() {
    let response = test_app().oneshot(get("/api/openapi.json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"].get("/api/paths/generate").is_some());
    assert!(body["paths"].get("/api/search").is_some());
}

#[tokio::test]
async fn index_page_is_embedded() {
    let response = test_app().oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("SkillDeck"));
}
