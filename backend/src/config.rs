//! Configuration management for the IndieCrop Advisory Engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with INDIECROP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Gemini generative API configuration
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key. Absence is a normal state: the engine serves the
    /// deterministic fallback instead of calling the model.
    pub api_key: Option<String>,

    /// Base endpoint for the Generative Language API
    pub api_endpoint: String,

    /// Model identifier
    pub model: String,

    /// Hard client timeout for one generation attempt
    pub timeout_seconds: u64,

    /// Sampling temperature
    pub temperature: f32,

    pub top_k: i32,

    pub top_p: f32,

    pub max_output_tokens: i32,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("INDIECROP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default(
                "gemini.api_endpoint",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("gemini.model", "gemini-1.5-flash-latest")?
            .set_default("gemini.timeout_seconds", 12)?
            .set_default("gemini.temperature", 0.7)?
            .set_default("gemini.top_k", 40)?
            .set_default("gemini.top_p", 0.95)?
            .set_default("gemini.max_output_tokens", 2048)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (INDIECROP_ prefix)
            .add_source(
                Environment::with_prefix("INDIECROP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
