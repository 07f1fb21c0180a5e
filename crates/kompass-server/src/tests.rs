//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use kompass_core::Profile;
use tower::ServiceExt;

fn setup_test_app() -> Router {
    create_router(ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_profile(uri: &str, profile: &Profile) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(profile).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_score_endpoint() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_profile("/api/score", &Profile::sample()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["emergency_fund"], 100.0);
    assert_eq!(json["property_insurance"], 100.0);
    // Every field is within range
    for (name, value) in json.as_object().unwrap() {
        let score = value.as_f64().unwrap();
        assert!(
            (0.0..=100.0).contains(&score),
            "{name} = {score} out of range"
        );
    }
}

#[tokio::test]
async fn test_score_rejects_malformed_profile() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/score")
                .header("content-type", "application/json")
                .body(Body::from("{\"personal\": {}}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_recommendations_endpoint() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_profile("/api/recommendations", &Profile::sample()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let recommendations = json.as_array().unwrap();
    // The sample profile has a weak debt score
    assert!(recommendations
        .iter()
        .any(|r| r["title"] == "Reduce debt" && r["pillar"] == "financial_basis"));
}

#[tokio::test]
async fn test_report_endpoint() {
    let app = setup_test_app();

    let response = app
        .oneshot(post_profile("/api/report", &Profile::sample()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;

    let pillars = json["pillars"].as_array().unwrap();
    assert_eq!(pillars.len(), 3);
    assert_eq!(pillars[0]["pillar"], "financial_basis");
    assert_eq!(pillars[0]["color"], "#0088FE");

    let breakdown = json["breakdown"].as_array().unwrap();
    assert_eq!(breakdown.len(), 8);
    // Sub-scores carry their pillar's theme color, not a severity color
    let debt = breakdown
        .iter()
        .find(|entry| entry["category"] == "debt")
        .unwrap();
    assert_eq!(debt["color"], "#0088FE");
    assert_eq!(debt["tier"], "poor");

    assert!(json["recommendations"].as_array().is_some());
    assert!(json["scores"]["overall"].as_f64().is_some());
}

#[tokio::test]
async fn test_status_endpoint_tier_colors() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/status?score=95")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["tier"], "excellent");
    assert_eq!(json["color"], "#4CAF50");
}

#[tokio::test]
async fn test_status_endpoint_pillar_color_wins() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/status?score=10&category=retirement_adequacy")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["tier"], "critical");
    // Asset pillar theme, despite the critical score
    assert_eq!(json["color"], "#FFBB28");
}

#[tokio::test]
async fn test_status_endpoint_unknown_category() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/status?score=50&category=unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("Unknown"));
}
