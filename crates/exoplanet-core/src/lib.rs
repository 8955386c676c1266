//! Exoplanet Core - Feature completion and inference for the Exoplanet AI service
//!
//! This crate provides the request-path building blocks shared by the HTTP
//! server and its tests:
//! - Model artifact loading and the model capability interface
//! - Feature schema resolution (which columns the model expects, in order)
//! - The per-request feature row and its completion engine
//! - The inference adapter producing a normalized prediction

pub mod artifact;
pub mod completion;
pub mod error;
pub mod infer;
pub mod model;
pub mod row;
pub mod schema;

// Re-export commonly used types
pub use artifact::ModelArtifact;
pub use completion::{complete, CanonicalInput};
pub use error::CoreError;
pub use infer::{run_inference, Inference, Prediction};
pub use model::{Model, ModelOutput};
pub use row::FeatureRow;
pub use schema::expected_feature_names;
