//! Model port: Trait for the glyhb inference boundary.
//!
//! This trait abstracts the trained regression artifact from the
//! application logic. The model is a black box: a total, synchronous,
//! possibly slow function from one feature record to one glyhb estimate.

use crate::domain::FeatureRecord;

/// Errors that can occur at the inference boundary.
///
/// Inference is a deterministic local call; failures are reported to the
/// caller and never retried.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("Model produced a non-finite prediction: {0}")]
    NonFinitePrediction(f64),
}

/// Trait for glyhb regression inference.
///
/// Implementations must accept the feature record in the exact 8-field
/// shape of `domain::FEATURE_NAMES` and return one glyhb estimate in
/// percent units per record.
pub trait GlyhbModel: Send + Sync {
    /// Run inference on a single feature record.
    ///
    /// # Errors
    /// Returns `ModelError::Unavailable` if the artifact could not produce
    /// a prediction, `ModelError::SchemaMismatch` if the record shape does
    /// not match the model's expected columns, and
    /// `ModelError::NonFinitePrediction` on internal numeric failure.
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelError>;
}
