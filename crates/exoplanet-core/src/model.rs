//! Model capability interface
//!
//! The trained estimator is a tagged variant resolved once at load time:
//! either it supports class probabilities or it does not. Both variants
//! consume the completed feature row as an ordered slice of floats.

use serde::{Deserialize, Serialize};

/// A loaded, immutable model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    /// Multinomial logistic model: predicts the argmax class label and
    /// exposes softmax probabilities.
    SoftmaxClassifier {
        classes: Vec<String>,
        /// One weight vector per class, each of feature-count length.
        weights: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
    /// Plain linear model: predicts a number, no probabilities.
    LinearRegressor { weights: Vec<f64>, intercept: f64 },
}

/// Raw model output before normalization by the inference adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelOutput {
    Number(f64),
    Label(String),
}

impl Model {
    /// Whether the model exposes class probabilities.
    pub fn supports_probabilities(&self) -> bool {
        matches!(self, Model::SoftmaxClassifier { .. })
    }

    /// Number of input features the stored coefficients expect.
    pub fn weight_len(&self) -> usize {
        match self {
            Model::SoftmaxClassifier { weights, .. } => {
                weights.first().map(|w| w.len()).unwrap_or(0)
            }
            Model::LinearRegressor { weights, .. } => weights.len(),
        }
    }

    /// Run a single synchronous prediction over the ordered feature values.
    pub fn predict(&self, values: &[f64]) -> ModelOutput {
        match self {
            Model::SoftmaxClassifier { classes, .. } => {
                let scores = self.class_scores(values);
                let best = scores
                    .iter()
                    .enumerate()
                    .max_by(|(_, a), (_, b)| a.total_cmp(b))
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                ModelOutput::Label(classes.get(best).cloned().unwrap_or_default())
            }
            Model::LinearRegressor { weights, intercept } => {
                ModelOutput::Number(dot(weights, values) + intercept)
            }
        }
    }

    /// Class probabilities for the ordered feature values, if supported.
    pub fn probabilities(&self, values: &[f64]) -> Option<Vec<f64>> {
        match self {
            Model::SoftmaxClassifier { .. } => Some(softmax(&self.class_scores(values))),
            Model::LinearRegressor { .. } => None,
        }
    }

    fn class_scores(&self, values: &[f64]) -> Vec<f64> {
        match self {
            Model::SoftmaxClassifier {
                weights,
                intercepts,
                ..
            } => weights
                .iter()
                .zip(intercepts)
                .map(|(w, b)| dot(w, values) + b)
                .collect(),
            Model::LinearRegressor { .. } => Vec::new(),
        }
    }
}

fn dot(weights: &[f64], values: &[f64]) -> f64 {
    weights.iter().zip(values).map(|(w, v)| w * v).sum()
}

fn softmax(scores: &[f64]) -> Vec<f64> {
    // Shift by the max score for numerical stability.
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
