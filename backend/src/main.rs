//! IndieCrop Advisory Engine - Backend Server
//!
//! Entry point: loads configuration, wires the Gemini client when an
//! API key is present, and serves the HTTP API.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use reqwest::Client;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use indiecrop_backend::external::GeminiClient;
use indiecrop_backend::services::{GeminiSource, RecommendationService};
use indiecrop_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "indiecrop_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting IndieCrop Advisory Engine");
    tracing::info!("Environment: {}", config.environment);

    let http_client = Client::builder()
        .timeout(Duration::from_secs(config.gemini.timeout_seconds))
        .build()?;

    let recommender = match GeminiClient::from_config(http_client, &config.gemini) {
        Some(client) => {
            tracing::info!("Gemini generation enabled (model: {})", config.gemini.model);
            RecommendationService::with_source(GeminiSource::new(client))
        }
        None => {
            tracing::info!("No Gemini API key configured, serving deterministic recommendations");
            RecommendationService::new()
        }
    };

    // Create application state
    let state = AppState {
        config: Arc::new(config.clone()),
        recommender: Arc::new(recommender),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
