//! Feature record derivation for the glyhb regression model.
//!
//! The 8-field layout is a hard contract with the trained model: any
//! deviation in field order or naming produces silently wrong predictions.

use serde::{Deserialize, Serialize};

use super::measurements::PatientMeasurements;

/// Feature column names in the exact order the trained model expects.
/// Order: chol, stab.glu, hdl, ratio, age, waist, hip, bmi
pub const FEATURE_NAMES: [&str; 8] = [
    "chol", "stab.glu", "hdl", "ratio", "age", "waist", "hip", "bmi",
];

/// Errors raised while deriving or converting measurement values.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MeasurementError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("division by zero computing {0}")]
    DivisionByZero(&'static str),
}

/// The single-row feature record submitted to the model.
///
/// Immutable once derived. Raw values are stored unrounded; any 2-decimal
/// rounding is display-only and must never feed back into this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Total cholesterol in mg/dL (`chol`)
    pub chol: f64,

    /// Stabilized glucose in mg/dL (`stab.glu`)
    pub stab_glu: f64,

    /// HDL cholesterol in mg/dL (`hdl`)
    pub hdl: f64,

    /// Derived: stabilized glucose / HDL (`ratio`)
    pub ratio: f64,

    /// Age in years (`age`)
    pub age: f64,

    /// Waist circumference in cm (`waist`)
    pub waist: f64,

    /// Hip circumference in cm (`hip`)
    pub hip: f64,

    /// Derived: weight_kg / height_m^2 (`bmi`)
    pub bmi: f64,
}

impl FeatureRecord {
    /// Derive the feature record from validated measurements.
    ///
    /// Computes `ratio = stab_glu / hdl` and `bmi = weight / height_m^2`.
    /// The domain bounds already exclude zero denominators, but alternate
    /// input paths (e.g. a unit conversion) could in principle feed zero,
    /// so both divisions are guarded explicitly.
    ///
    /// # Errors
    /// Returns `MeasurementError::DivisionByZero` if `hdl_mgdl` or
    /// `height_cm` is zero.
    pub fn derive(m: &PatientMeasurements) -> Result<Self, MeasurementError> {
        if m.hdl_mgdl == 0.0 {
            return Err(MeasurementError::DivisionByZero("glucose/HDL ratio"));
        }
        if m.height_cm == 0.0 {
            return Err(MeasurementError::DivisionByZero("BMI"));
        }

        let ratio = m.stabilized_glucose_mgdl / m.hdl_mgdl;
        let height_m = m.height_cm / 100.0;
        let bmi = m.weight_kg / (height_m * height_m);

        Ok(Self {
            chol: m.cholesterol_mgdl,
            stab_glu: m.stabilized_glucose_mgdl,
            hdl: m.hdl_mgdl,
            ratio,
            age: f64::from(m.age_years),
            waist: m.waist_cm,
            hip: m.hip_cm,
            bmi,
        })
    }

    /// Convert the record to a vector for model inference.
    /// Order matches [`FEATURE_NAMES`]: chol, stab.glu, hdl, ratio, age, waist, hip, bmi
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        vec![
            self.chol,
            self.stab_glu,
            self.hdl,
            self.ratio,
            self.age,
            self.waist,
            self.hip,
            self.bmi,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_ratio_is_exact_division() {
        let record = FeatureRecord::derive(&typical()).expect("should derive");
        assert!((record.ratio - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bmi_matches_standard_formula() {
        let record = FeatureRecord::derive(&typical()).expect("should derive");
        // 70 / 1.70^2 = 24.2214...
        assert!((record.bmi - 24.221_453_287_197_232).abs() < 1e-9);
    }

    #[test]
    fn test_vec_order_matches_contract() {
        let record = FeatureRecord::derive(&typical()).expect("should derive");
        let v = record.to_vec();
        assert_eq!(v.len(), FEATURE_NAMES.len());
        assert_eq!(
            v,
            vec![200.0, 100.0, 50.0, record.ratio, 45.0, 80.0, 95.0, record.bmi]
        );
    }

    #[test]
    fn test_zero_hdl_is_guarded() {
        let m = PatientMeasurements {
            hdl_mgdl: 0.0,
            ..typical()
        };
        let err = FeatureRecord::derive(&m).expect_err("must fail");
        assert!(matches!(err, MeasurementError::DivisionByZero(_)));
    }

    #[test]
    fn test_zero_height_is_guarded() {
        let m = PatientMeasurements {
            height_cm: 0.0,
            ..typical()
        };
        let err = FeatureRecord::derive(&m).expect_err("must fail");
        assert!(matches!(err, MeasurementError::DivisionByZero("BMI")));
    }

    #[test]
    fn test_values_are_stored_unrounded() {
        let m = PatientMeasurements {
            stabilized_glucose_mgdl: 100.0,
            hdl_mgdl: 30.0,
            ..typical()
        };
        let record = FeatureRecord::derive(&m).expect("should derive");
        // 100/30 keeps full precision, not a display-rounded 3.33
        assert!((record.ratio - 100.0 / 30.0).abs() < f64::EPSILON);
    }
}
