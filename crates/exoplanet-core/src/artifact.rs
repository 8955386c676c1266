//! Model artifact loading
//!
//! The trained model ships as a single JSON document: a free-form metadata
//! object (probed by the schema resolver) and the model coefficients. The
//! artifact is loaded once at startup and never mutated afterwards.

use crate::error::{CoreError, Result};
use crate::model::Model;
use crate::schema;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A deserialized model artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelArtifact {
    /// Free-form metadata written at training time.
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,

    /// The trained estimator.
    pub model: Model,
}

impl ModelArtifact {
    /// Load and validate an artifact from disk.
    ///
    /// A missing file is a distinct, startup-fatal error so the operator
    /// sees the configured path rather than a bare I/O failure.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::ModelNotFound(path.display().to_string()));
        }

        let bytes = fs::read(path)?;
        let artifact: ModelArtifact = serde_json::from_slice(&bytes)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Ordered feature names resolved from the metadata. Empty when the
    /// artifact carries no usable schema.
    pub fn feature_names(&self) -> Vec<String> {
        schema::expected_feature_names(&self.metadata)
    }

    fn validate(&self) -> Result<()> {
        match &self.model {
            Model::SoftmaxClassifier {
                classes,
                weights,
                intercepts,
            } => {
                if classes.is_empty() {
                    return Err(CoreError::InvalidArtifact(
                        "classifier has no classes".to_string(),
                    ));
                }
                if weights.len() != classes.len() || intercepts.len() != classes.len() {
                    return Err(CoreError::InvalidArtifact(format!(
                        "expected {} weight vectors and intercepts, got {} and {}",
                        classes.len(),
                        weights.len(),
                        intercepts.len()
                    )));
                }
                let width = weights[0].len();
                if weights.iter().any(|w| w.len() != width) {
                    return Err(CoreError::InvalidArtifact(
                        "weight vectors have inconsistent lengths".to_string(),
                    ));
                }
            }
            Model::LinearRegressor { weights, .. } => {
                if weights.is_empty() {
                    return Err(CoreError::InvalidArtifact(
                        "regressor has no weights".to_string(),
                    ));
                }
            }
        }

        // When the metadata names features, the coefficient width must agree.
        let names = self.feature_names();
        if !names.is_empty() && names.len() != self.model.weight_len() {
            return Err(CoreError::InvalidArtifact(format!(
                "metadata names {} features but model weights cover {}",
                names.len(),
                self.model.weight_len()
            )));
        }

        Ok(())
    }
}
