//! Regressor adapter: glyhb prediction from a JSON-exported model.
//!
//! The training pipeline exports a standardized linear regressor as JSON:
//! feature names, scaler parameters and coefficients. The adapter loads the
//! artifact once at startup into an owned, immutable handle (no lazy global
//! cache) and verifies the feature-name contract both at load time and
//! before every prediction, so a misaligned artifact fails fast instead of
//! silently feeding a misordered row into the dot product.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{FeatureRecord, FEATURE_NAMES};
use crate::ports::{GlyhbModel, ModelError};

/// Model artifact file names probed inside the model directory.
const CANDIDATE_FILES: [&str; 2] = ["glyhb_model.json", "model.json"];

/// Model parameters exported by the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportedRegressionModel {
    /// Feature column names, in the order coefficients apply
    pub feature_names: Vec<String>,
    /// Regression coefficients over standardized features
    pub coefficients: Vec<f64>,
    /// Regression intercept
    pub intercept: f64,
    /// Standard scaler: per-feature mean
    pub scaler_mean: Vec<f64>,
    /// Standard scaler: per-feature standard deviation
    pub scaler_scale: Vec<f64>,
}

/// Glyhb regression engine backed by an exported artifact.
#[derive(Debug)]
pub struct GlyhbRegressor {
    model: ExportedRegressionModel,
}

impl GlyhbRegressor {
    /// Load the model artifact from a directory (or direct file path).
    ///
    /// Probes `glyhb_model.json` then `model.json` when given a directory.
    /// Sanity-checks parameter vector lengths and verifies the exported
    /// feature names against the canonical contract.
    ///
    /// # Errors
    /// Returns `ModelError::Unavailable` if no artifact is found or it is
    /// unreadable, and `ModelError::SchemaMismatch` if the artifact does
    /// not match the 8-field contract.
    pub fn load(model_path: &Path) -> Result<Self, ModelError> {
        let artifact = if model_path.is_file() {
            model_path.to_path_buf()
        } else {
            CANDIDATE_FILES
                .iter()
                .map(|name| model_path.join(name))
                .find(|p| p.exists())
                .ok_or_else(|| {
                    ModelError::Unavailable(format!(
                        "no model JSON found in {model_path:?} (expected glyhb_model.json or model.json)"
                    ))
                })?
        };

        let content = std::fs::read_to_string(&artifact)
            .map_err(|e| ModelError::Unavailable(format!("failed to read {artifact:?}: {e}")))?;
        let model: ExportedRegressionModel = serde_json::from_str(&content)
            .map_err(|e| ModelError::Unavailable(format!("invalid model format: {e}")))?;

        let regressor = Self::from_exported(model)?;
        tracing::info!(
            "Loaded glyhb model from {:?} ({} features)",
            artifact,
            regressor.model.feature_names.len()
        );
        Ok(regressor)
    }

    /// Build a regressor from already-parsed parameters.
    ///
    /// # Errors
    /// Returns `ModelError::SchemaMismatch` on inconsistent parameter
    /// lengths or a feature-name contract violation.
    pub fn from_exported(model: ExportedRegressionModel) -> Result<Self, ModelError> {
        let n = model.feature_names.len();
        if model.coefficients.len() != n
            || model.scaler_mean.len() != n
            || model.scaler_scale.len() != n
        {
            return Err(ModelError::SchemaMismatch(
                "model parameter lengths do not match feature_names length".into(),
            ));
        }
        if model.scaler_scale.iter().any(|s| *s == 0.0 || !s.is_finite()) {
            return Err(ModelError::SchemaMismatch(
                "scaler_scale entries must be finite and non-zero".into(),
            ));
        }

        let regressor = Self { model };
        regressor.check_schema()?;
        Ok(regressor)
    }

    /// Verify the artifact's feature names equal the canonical contract.
    fn check_schema(&self) -> Result<(), ModelError> {
        let names = &self.model.feature_names;
        if names.len() != FEATURE_NAMES.len()
            || names.iter().zip(FEATURE_NAMES.iter()).any(|(a, b)| a != b)
        {
            return Err(ModelError::SchemaMismatch(format!(
                "model expects columns {names:?}, contract is {FEATURE_NAMES:?}"
            )));
        }
        Ok(())
    }
}

impl GlyhbModel for GlyhbRegressor {
    fn predict(&self, record: &FeatureRecord) -> Result<f64, ModelError> {
        // Schema is checked per call: the handle is immutable, but the
        // contract must hold for every row that reaches the dot product.
        self.check_schema()?;

        let features = record.to_vec();
        let mut glyhb = self.model.intercept;
        for (i, x) in features.iter().enumerate() {
            let standardized = (x - self.model.scaler_mean[i]) / self.model.scaler_scale[i];
            glyhb += self.model.coefficients[i] * standardized;
        }

        if !glyhb.is_finite() {
            return Err(ModelError::NonFinitePrediction(glyhb));
        }

        tracing::debug!("Predicted glyhb {:.3}%", glyhb);
        Ok(glyhb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn exported(intercept: f64) -> ExportedRegressionModel {
        ExportedRegressionModel {
            feature_names: FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect(),
            coefficients: vec![0.0; 8],
            intercept,
            scaler_mean: vec![0.0; 8],
            scaler_scale: vec![1.0; 8],
        }
    }

    fn record() -> FeatureRecord {
        FeatureRecord {
            chol: 200.0,
            stab_glu: 100.0,
            hdl: 50.0,
            ratio: 2.0,
            age: 45.0,
            waist: 80.0,
            hip: 95.0,
            bmi: 24.22,
        }
    }

    #[test]
    fn test_load_prefers_glyhb_model_json() {
        let temp = tempdir().expect("tempdir");
        let dir = temp.path();

        let preferred = serde_json::to_string(&exported(5.5)).expect("serialize");
        let fallback = serde_json::to_string(&exported(9.9)).expect("serialize");
        std::fs::write(dir.join("glyhb_model.json"), preferred).expect("write");
        std::fs::write(dir.join("model.json"), fallback).expect("write");

        let regressor = GlyhbRegressor::load(dir).expect("load");
        assert!((regressor.model.intercept - 5.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_load_missing_artifact_is_unavailable() {
        let temp = tempdir().expect("tempdir");
        let err = GlyhbRegressor::load(temp.path()).expect_err("must fail");
        assert!(matches!(err, ModelError::Unavailable(_)));
    }

    #[test]
    fn test_mismatched_parameter_lengths_rejected() {
        let mut model = exported(5.5);
        model.coefficients.pop();
        let err = GlyhbRegressor::from_exported(model).expect_err("must fail");
        assert!(matches!(err, ModelError::SchemaMismatch(_)));
    }

    #[test]
    fn test_foreign_column_names_rejected() {
        let mut model = exported(5.5);
        model.feature_names[1] = "glucose".to_string();
        let err = GlyhbRegressor::from_exported(model).expect_err("must fail");
        assert!(matches!(err, ModelError::SchemaMismatch(_)));
    }

    #[test]
    fn test_zero_scale_rejected() {
        let mut model = exported(5.5);
        model.scaler_scale[3] = 0.0;
        let err = GlyhbRegressor::from_exported(model).expect_err("must fail");
        assert!(matches!(err, ModelError::SchemaMismatch(_)));
    }

    #[test]
    fn test_prediction_is_standardized_dot_product() {
        let mut model = exported(5.0);
        // Only the ratio column contributes: (2.0 - 1.0) / 0.5 * 0.3 = 0.6
        model.coefficients[3] = 0.3;
        model.scaler_mean[3] = 1.0;
        model.scaler_scale[3] = 0.5;

        let regressor = GlyhbRegressor::from_exported(model).expect("build");
        let glyhb = regressor.predict(&record()).expect("predict");
        assert!((glyhb - 5.6).abs() < 1e-9);
    }
}
