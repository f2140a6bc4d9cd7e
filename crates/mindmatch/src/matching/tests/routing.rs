use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::matching::domain::{Concern, VerificationStatus};
use crate::matching::{recommendation_router, RecommendationEngine};

fn router() -> axum::Router {
    recommendation_router(Arc::new(RecommendationEngine::with_default_vocabulary()))
}

fn post_json(payload: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/recommendations")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request builds")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn recommendations_endpoint_ranks_candidates() {
    let mut candidate = therapist("t-1");
    candidate.specializations = vec!["Anxiety therapy".to_string()];
    candidate.years_of_experience = 11;
    candidate.average_rating = 4.7;
    candidate.verification_status = VerificationStatus::Verified;

    let assessment = assessment(vec![Concern::Anxiety], 4);
    let payload = json!({
        "assessment": assessment,
        "therapists": [candidate],
    });

    let response = router().oneshot(post_json(payload)).await.expect("routes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_found"], 1);
    assert_eq!(body["recommendations"].as_array().expect("array").len(), 1);
    assert_eq!(body["assessment_summary"]["impact_level"], 4);
    assert_eq!(
        body["recommendations"][0]["therapist"]["id"],
        "t-1"
    );
}

#[tokio::test]
async fn empty_concerns_are_rejected() {
    let assessment = assessment(Vec::new(), 3);
    let payload = json!({
        "assessment": assessment,
        "therapists": [],
    });

    let response = router().oneshot(post_json(payload)).await.expect("routes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("concern"));
}

#[tokio::test]
async fn out_of_range_impact_level_is_rejected() {
    let assessment = assessment(vec![Concern::Anxiety], 0);
    let payload = json!({
        "assessment": assessment,
        "therapists": [],
    });

    let response = router().oneshot(post_json(payload)).await.expect("routes");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn empty_pool_returns_ok_with_no_matches() {
    let assessment = assessment(vec![Concern::Depression], 2);
    let payload = json!({
        "assessment": assessment,
        "options": { "verified_only": true },
    });

    let response = router().oneshot(post_json(payload)).await.expect("routes");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["total_found"], 0);
    assert!(body["recommendations"].as_array().expect("array").is_empty());
}
