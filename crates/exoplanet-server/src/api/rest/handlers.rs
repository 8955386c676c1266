//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::auth::verify_api_key;
use crate::error::ServerError;
use axum::{extract::State, http::HeaderMap, Json};
use exoplanet_core::{complete, run_inference, CanonicalInput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Root endpoint
pub(super) async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Welcome to the Exoplanet AI API".to_string(),
    })
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Feature metadata endpoint
pub(super) async fn features(State(state): State<AppState>) -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        model_feature_count: state.feature_names.len(),
        model_feature_names: state.feature_names.as_ref().clone(),
        accepted_inputs: accepted_inputs(),
    })
}

/// Inference endpoint
///
/// The key check resolves before the body result is inspected, so an
/// unauthorized caller gets 401 even when the body is malformed.
#[axum::debug_handler]
pub(super) async fn predict(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<JsonExtractor<CanonicalInput>, ServerError>,
) -> Result<Json<PredictResponse>, ServerError> {
    if !verify_api_key(&headers, &state.api_token) {
        return Err(ServerError::Unauthorized);
    }

    let JsonExtractor(input) = body?;

    if state.feature_names.is_empty() {
        return Err(ServerError::SchemaUnavailable);
    }

    info!(
        "Received inference request, period_days={}, completing {} features",
        input.period_days,
        state.feature_names.len()
    );

    // Fresh generator per request so concurrent requests never share state.
    let mut rng = StdRng::from_entropy();
    let row = complete(&state.feature_names, &input, &mut rng);

    let inference = run_inference(&state.model, &row);

    Ok(Json(PredictResponse {
        prediction: inference.prediction,
        proba: inference.proba,
    }))
}
