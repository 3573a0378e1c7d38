//! Screening service: Orchestrates one prediction cycle.
//!
//! This service coordinates:
//! - Measurement validation against domain bounds
//! - Feature record derivation (ratio, BMI)
//! - Model inference via the injected handle
//! - Risk band classification

use std::sync::Arc;

use crate::domain::{FeatureRecord, PatientMeasurements, Screening};
use crate::ports::GlyhbModel;
use crate::GlyscreenError;

/// Service for running glyhb screenings.
///
/// The model handle is injected at construction and treated as read-only
/// for the lifetime of the service. Each screening is request-scoped and
/// runs synchronously to completion; no state is shared across requests.
pub struct ScreeningService<M>
where
    M: GlyhbModel,
{
    model: Arc<M>,
}

impl<M> ScreeningService<M>
where
    M: GlyhbModel,
{
    /// Create a new screening service with an injected model handle.
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Run one full prediction cycle on raw measurements.
    ///
    /// Performs the pipeline:
    /// 1. Validate measurements against domain bounds
    /// 2. Derive the 8-field feature record
    /// 3. Run model inference
    /// 4. Classify the predicted glyhb into a risk band
    ///
    /// Any failure halts the cycle and is reported to the caller; no step
    /// is retried and no fabricated result is ever produced.
    ///
    /// # Errors
    /// Returns `GlyscreenError::InvalidInput` for out-of-domain
    /// measurements, `GlyscreenError::Measurement` on derivation guards and
    /// `GlyscreenError::Model` when the inference boundary fails.
    pub fn run_screening(
        &self,
        measurements: &PatientMeasurements,
    ) -> Result<Screening, GlyscreenError> {
        tracing::info!("Starting screening pipeline...");

        tracing::debug!("Step 1: Validating measurements...");
        measurements
            .validate()
            .map_err(|errors| GlyscreenError::InvalidInput(errors.join(", ")))?;

        tracing::debug!("Step 2: Deriving feature record...");
        let record = FeatureRecord::derive(measurements)?;
        tracing::debug!(
            "Derived features: ratio={:.4}, bmi={:.4}",
            record.ratio,
            record.bmi
        );

        tracing::debug!("Step 3: Running model inference...");
        let glyhb = self.model.predict(&record)?;

        tracing::debug!("Step 4: Classifying risk band...");
        let screening = Screening::new(record, glyhb);

        tracing::info!(
            "Screening complete: glyhb={:.2}%, risk={}",
            screening.glyhb,
            screening.risk_band
        );

        Ok(screening)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskBand;
    use crate::ports::ModelError;

    /// Stub model returning a fixed glyhb value.
    struct StubModel(f64);

    impl GlyhbModel for StubModel {
        fn predict(&self, _record: &FeatureRecord) -> Result<f64, ModelError> {
            Ok(self.0)
        }
    }

    /// Stub model that always fails at the inference boundary.
    struct BrokenModel;

    impl GlyhbModel for BrokenModel {
        fn predict(&self, _record: &FeatureRecord) -> Result<f64, ModelError> {
            Err(ModelError::Unavailable("artifact missing".into()))
        }
    }

    fn typical() -> PatientMeasurements {
        PatientMeasurements {
            cholesterol_mgdl: 200.0,
            stabilized_glucose_mgdl: 100.0,
            hdl_mgdl: 50.0,
            age_years: 45,
            waist_cm: 80.0,
            hip_cm: 95.0,
            weight_kg: 70.0,
            height_cm: 170.0,
        }
    }

    #[test]
    fn test_end_to_end_screening() {
        let service = ScreeningService::new(Arc::new(StubModel(6.8)));
        let screening = service.run_screening(&typical()).expect("should screen");

        assert!((screening.record.chol - 200.0).abs() < f64::EPSILON);
        assert!((screening.record.ratio - 2.0).abs() < f64::EPSILON);
        assert!((screening.record.bmi - 24.22).abs() < 0.01);
        assert!((screening.glyhb - 6.8).abs() < f64::EPSILON);
        assert_eq!(screening.risk_band, RiskBand::DiabeticRisk);
    }

    #[test]
    fn test_out_of_domain_input_never_reaches_model() {
        struct PanickingModel;
        impl GlyhbModel for PanickingModel {
            fn predict(&self, _record: &FeatureRecord) -> Result<f64, ModelError> {
                panic!("model must not be called for invalid input");
            }
        }

        let service = ScreeningService::new(Arc::new(PanickingModel));
        let m = PatientMeasurements {
            age_years: 10,
            ..typical()
        };
        let err = service.run_screening(&m).expect_err("must fail");
        assert!(matches!(err, GlyscreenError::InvalidInput(_)));
    }

    #[test]
    fn test_model_failure_is_surfaced() {
        let service = ScreeningService::new(Arc::new(BrokenModel));
        let err = service.run_screening(&typical()).expect_err("must fail");
        assert!(matches!(err, GlyscreenError::Model(_)));
    }
}
