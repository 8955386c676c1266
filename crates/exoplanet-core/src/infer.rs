//! Inference adapter
//!
//! Converts a completed feature row into the model's tabular input, runs a
//! single synchronous prediction, and normalizes the output so regression
//! models and label classifiers serve the same response shape. A label that
//! parses as a number is coerced to one; anything else stays a string.

use crate::model::{Model, ModelOutput};
use crate::row::FeatureRow;
use serde::Serialize;

/// Normalized prediction value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Prediction {
    Number(f64),
    Label(String),
}

/// Result of one inference call.
#[derive(Debug, Clone, Serialize)]
pub struct Inference {
    pub prediction: Prediction,
    pub proba: Option<Vec<f64>>,
}

/// Run the model over the completed row.
///
/// Column order follows the row, which by construction follows the resolved
/// feature name list. No retries, no shared mutable state.
pub fn run_inference(model: &Model, row: &FeatureRow) -> Inference {
    let values = row.values();

    let prediction = match model.predict(&values) {
        ModelOutput::Number(v) => Prediction::Number(v),
        ModelOutput::Label(label) => match label.parse::<f64>() {
            Ok(v) => Prediction::Number(v),
            Err(_) => Prediction::Label(label),
        },
    };

    Inference {
        prediction,
        proba: model.probabilities(&values),
    }
}
