//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use exoplanet_core::{Model, Prediction};
use serde::Serialize;
use std::sync::Arc;

/// Application state
///
/// Everything here is immutable after startup and shared read-only across
/// concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// The loaded model
    pub model: Arc<Model>,

    /// Feature names resolved once at startup, in model order. May be empty
    /// when the artifact carries no usable schema; /predict then returns 500.
    pub feature_names: Arc<Vec<String>>,

    /// Shared secret for the X-API-Key gate
    pub api_token: Arc<String>,
}

/// Root endpoint response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// One entry of the fixed accepted-inputs description
#[derive(Debug, Serialize)]
pub struct AcceptedInput {
    pub name: &'static str,
    pub description: &'static str,
}

/// Feature metadata response
#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub model_feature_count: usize,
    pub model_feature_names: Vec<String>,
    pub accepted_inputs: Vec<AcceptedInput>,
}

/// Inference response
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: Prediction,
    pub proba: Option<Vec<f64>>,
}

/// The fixed description of the six canonical inputs served by /features.
pub fn accepted_inputs() -> Vec<AcceptedInput> {
    vec![
        AcceptedInput {
            name: "period_days",
            description: "Orbital period in days",
        },
        AcceptedInput {
            name: "duration_hours",
            description: "Transit duration in hours",
        },
        AcceptedInput {
            name: "rp_rearth",
            description: "Planetary Radius (Earth radii)",
        },
        AcceptedInput {
            name: "rstar_rsun",
            description: "Stellar Radius (Solar radii)",
        },
        AcceptedInput {
            name: "mag",
            description: "Stellar magnitude (brightness)",
        },
        AcceptedInput {
            name: "teff_k",
            description: "Stellar effective temperature (K)",
        },
    ]
}
