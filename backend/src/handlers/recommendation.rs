//! HTTP handlers for recommendation endpoints

use axum::{extract::State, Json};
use serde::Deserialize;

use shared::{FarmProfileInput, RecommendationResult};

use crate::error::AppResult;
use crate::services::fallback;
use crate::AppState;

/// Request body for recommendation generation
#[derive(Debug, Deserialize)]
pub struct GenerateRecommendationsRequest {
    #[serde(alias = "farmProfile")]
    pub farm_profile: FarmProfileInput,
}

/// Generate recommendations for a submitted farm profile.
///
/// Validation failures return the structured error envelope; a valid
/// profile always produces a result because provider failures are
/// absorbed by the deterministic fallback.
pub async fn generate_recommendations(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecommendationsRequest>,
) -> AppResult<Json<RecommendationResult>> {
    let profile = request.farm_profile.validate()?;
    let result = state.recommender.generate(&profile).await;
    Ok(Json(result))
}

/// Serve the fixed demo-mode result
pub async fn get_demo_recommendations() -> Json<RecommendationResult> {
    Json(fallback::demo_result())
}
