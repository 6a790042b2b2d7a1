//! Recommendation generation service
//!
//! The service tries one remote generation attempt and otherwise
//! serves the deterministic fallback, so `generate` can never fail.
//! There are no retries; the fallback is the retry strategy.

use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::warn;

use shared::{ClimateReference, FarmProfile, RecommendationResult};

use crate::external::gemini::{GeminiClient, GeminiError};
use crate::services::fallback;
use crate::services::parse::{self, ParseError};
use crate::services::prompt;

/// Why a remote generation attempt produced no result
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("unusable generated text: {0}")]
    Parse(#[from] ParseError),
}

impl From<GeminiError> for ProviderError {
    fn from(err: GeminiError) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

/// Strategy over recommendation backends.
///
/// The service is generic over its source so tests can inject fakes
/// without touching the network.
#[allow(async_fn_in_trait)]
pub trait RecommendationSource {
    async fn recommend(
        &self,
        profile: &FarmProfile,
        today: NaiveDate,
    ) -> Result<RecommendationResult, ProviderError>;
}

/// Source backed by the Gemini generateContent API
#[derive(Clone)]
pub struct GeminiSource {
    client: GeminiClient,
    climate: ClimateReference,
}

impl GeminiSource {
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            climate: ClimateReference::jimma(),
        }
    }
}

impl RecommendationSource for GeminiSource {
    async fn recommend(
        &self,
        profile: &FarmProfile,
        today: NaiveDate,
    ) -> Result<RecommendationResult, ProviderError> {
        let prompt = prompt::build_recommendation_prompt(profile, &self.climate, today);
        let text = self.client.generate_text(&prompt).await?;
        let result = parse::parse_recommendation(&text)?;
        Ok(result)
    }
}

/// Generates advisory results for validated farm profiles
pub struct RecommendationService<S = GeminiSource> {
    remote: Option<S>,
}

impl RecommendationService<GeminiSource> {
    /// Service with no remote source; every request takes the
    /// deterministic path
    pub fn new() -> Self {
        Self { remote: None }
    }
}

impl Default for RecommendationService<GeminiSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RecommendationSource> RecommendationService<S> {
    /// Service that tries `source` before falling back
    pub fn with_source(source: S) -> Self {
        Self {
            remote: Some(source),
        }
    }

    /// Generate a result anchored at the current date
    pub async fn generate(&self, profile: &FarmProfile) -> RecommendationResult {
        self.generate_at(profile, Utc::now().date_naive()).await
    }

    /// Generate a result anchored at an explicit date
    pub async fn generate_at(
        &self,
        profile: &FarmProfile,
        today: NaiveDate,
    ) -> RecommendationResult {
        if let Some(remote) = &self.remote {
            match remote.recommend(profile, today).await {
                Ok(result) => return result,
                Err(err) => {
                    warn!(error = %err, "remote recommendation failed, serving deterministic fallback");
                }
            }
        }
        fallback::synthesize(profile, today)
    }
}
