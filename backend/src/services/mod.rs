//! Business logic services for the IndieCrop Advisory Engine

pub mod fallback;
pub mod parse;
pub mod prompt;
pub mod recommendation;

pub use recommendation::{GeminiSource, RecommendationService, RecommendationSource};
