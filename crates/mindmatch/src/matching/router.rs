use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::domain::{Assessment, TherapistProfile};
use super::ranking::RecommendationOptions;
use super::RecommendationEngine;

/// Router builder exposing the recommendation boundary over HTTP.
///
/// The handler plays the "caller" role from the engine's contract: it
/// performs the input validation the pure scoring path skips, then hands the
/// resolved assessment and candidate pool to the engine.
pub fn recommendation_router(engine: Arc<RecommendationEngine>) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .with_state(engine)
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecommendationRequest {
    pub(crate) assessment: Assessment,
    #[serde(default)]
    pub(crate) therapists: Vec<TherapistProfile>,
    #[serde(default)]
    pub(crate) options: RecommendationOptions,
}

pub(crate) async fn recommend_handler(
    State(engine): State<Arc<RecommendationEngine>>,
    axum::Json(request): axum::Json<RecommendationRequest>,
) -> Response {
    if request.assessment.concerns.is_empty() {
        let payload = json!({
            "error": "at least one mental health concern is required",
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    if !(1..=5).contains(&request.assessment.impact_level) {
        let payload = json!({
            "error": "impact level must be between 1 and 5",
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let ranked = engine.recommend(&request.assessment, &request.therapists, &request.options);
    debug!(
        candidates = request.therapists.len(),
        scored = ranked.total_found,
        returned = ranked.recommendations.len(),
        "ranked therapist candidates"
    );

    (StatusCode::OK, axum::Json(ranked)).into_response()
}
