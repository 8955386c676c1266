//! Tests for REST API components

#![cfg(test)]

use super::types::*;
use exoplanet_core::{Model, Prediction};
use std::sync::Arc;

fn stub_state(names: &[&str]) -> AppState {
    AppState {
        model: Arc::new(Model::LinearRegressor {
            weights: vec![0.0; names.len()],
            intercept: 0.0,
        }),
        feature_names: Arc::new(names.iter().map(|s| s.to_string()).collect()),
        api_token: Arc::new("token".to_string()),
    }
}

#[test]
fn test_accepted_inputs_are_the_six_canonical_fields() {
    let inputs = accepted_inputs();

    let names: Vec<&str> = inputs.iter().map(|i| i.name).collect();
    assert_eq!(
        names,
        vec![
            "period_days",
            "duration_hours",
            "rp_rearth",
            "rstar_rsun",
            "mag",
            "teff_k"
        ]
    );
    assert!(inputs.iter().all(|i| !i.description.is_empty()));
}

#[test]
fn test_features_response_serialization() {
    let response = FeaturesResponse {
        model_feature_count: 2,
        model_feature_names: vec!["period_days".to_string(), "mag".to_string()],
        accepted_inputs: accepted_inputs(),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["model_feature_count"], 2);
    assert_eq!(json["model_feature_names"][1], "mag");
    assert_eq!(json["accepted_inputs"][0]["name"], "period_days");
    assert_eq!(
        json["accepted_inputs"][0]["description"],
        "Orbital period in days"
    );
}

#[test]
fn test_predict_response_with_probabilities() {
    let response = PredictResponse {
        prediction: Prediction::Label("planet".to_string()),
        proba: Some(vec![0.7, 0.2, 0.1]),
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["prediction"], "planet");
    assert_eq!(json["proba"][0], 0.7);
}

#[test]
fn test_predict_response_without_probabilities() {
    let response = PredictResponse {
        prediction: Prediction::Number(1.0),
        proba: None,
    };

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["prediction"], 1.0);
    assert!(json["proba"].is_null());
}

#[test]
fn test_app_state_is_cheaply_cloneable() {
    let state = stub_state(&["period_days"]);
    let cloned = state.clone();

    assert!(Arc::ptr_eq(&state.model, &cloned.model));
    assert!(Arc::ptr_eq(&state.feature_names, &cloned.feature_names));
    assert_eq!(*cloned.api_token, "token");
}

#[test]
fn test_health_response_fields() {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: "0.1.0".to_string(),
    };

    assert_eq!(response.status, "healthy");
    assert_eq!(response.version, "0.1.0");
}
