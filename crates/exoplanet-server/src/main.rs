//! Exoplanet AI HTTP Server
//!
//! Serves a trained transit classifier behind an authenticated REST API.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;

use crate::api::rest::types::AppState;
use crate::config::ServerConfig;
use anyhow::Result;
use exoplanet_core::ModelArtifact;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    init_tracing()?;

    // Load configuration
    let config = ServerConfig::load()?;
    info!("Loaded configuration: host={} port={}", config.host, config.port);

    // Load the model artifact; a missing file aborts startup.
    let artifact = ModelArtifact::load(&config.model_path)?;
    let feature_names = artifact.feature_names();
    info!(
        "Model loaded from {} ({} features)",
        config.model_path.display(),
        feature_names.len()
    );
    if feature_names.is_empty() {
        warn!("Model exposes no feature metadata, /predict will return 500");
    }
    if config.api_token.is_empty() {
        warn!("EXOPLANET_API_TOKEN not set, /predict will reject all requests");
    }

    let state = AppState {
        model: Arc::new(artifact.model),
        feature_names: Arc::new(feature_names),
        api_token: Arc::new(config.api_token.clone()),
    };

    // Create router
    let app = api::create_router(state, &config.allowed_origins);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Feature metadata: http://{}/features", addr);
    info!("  Inference API: POST http://{}/predict", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exoplanet_server=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
