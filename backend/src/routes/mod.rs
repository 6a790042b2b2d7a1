//! Route definitions for the IndieCrop Advisory Engine

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Recommendation generation
        .nest("/recommendations", recommendation_routes())
        // Stateless calendar organizer
        .nest("/calendar", calendar_routes())
}

/// Recommendation routes
fn recommendation_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::generate_recommendations))
        .route("/demo", get(handlers::get_demo_recommendations))
}

/// Calendar routes (the task list travels in each request body)
fn calendar_routes() -> Router<AppState> {
    Router::new()
        .route("/weeks", post(handlers::get_calendar_weeks))
        .route("/search", post(handlers::search_calendar_tasks))
        .route("/on-date", post(handlers::get_tasks_on_date))
}
