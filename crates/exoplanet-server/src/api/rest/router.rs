//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the REST API router.
///
/// `allowed_origins` is either "*" (any origin) or a single exact origin,
/// mirroring the ALLOWED_ORIGINS environment convention.
pub fn create_router(state: AppState, allowed_origins: &str) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/features", get(features))
        .route("/predict", post(predict))
        .with_state(state)
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(allowed_origins: &str) -> CorsLayer {
    if allowed_origins == "*" {
        return CorsLayer::permissive();
    }

    match allowed_origins.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(Any)
            .allow_headers(Any),
        Err(_) => {
            tracing::warn!(
                "Invalid allowed_origins '{}', falling back to permissive CORS",
                allowed_origins
            );
            CorsLayer::permissive()
        }
    }
}
