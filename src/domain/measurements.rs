//! Patient measurement types for glyhb (HbA1c) prediction.
//!
//! Measurements are collected per prediction request, validated against
//! clinical domain bounds, then discarded after the result is rendered.

use serde::{Deserialize, Serialize};

/// Raw clinical measurements in canonical units (mg/dL, kg, cm).
///
/// Any alternate-unit input (lbs, inches, mmol/L) must be converted via
/// `domain::units` before constructing this type. All fields must be within
/// their domain bounds before feature derivation; the collecting surface is
/// responsible for rejecting out-of-range entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PatientMeasurements {
    /// Total cholesterol in mg/dL (100-500)
    pub cholesterol_mgdl: f64,

    /// Stabilized glucose in mg/dL (40-400)
    pub stabilized_glucose_mgdl: f64,

    /// HDL cholesterol in mg/dL (10-120)
    pub hdl_mgdl: f64,

    /// Age in years (18-100)
    pub age_years: u32,

    /// Waist circumference in cm (20-150)
    pub waist_cm: f64,

    /// Hip circumference in cm (20-150)
    pub hip_cm: f64,

    /// Body weight in kg (30-200)
    pub weight_kg: f64,

    /// Height in cm (100-250)
    pub height_cm: f64,
}

impl PatientMeasurements {
    /// Validate that all measurements are finite and within expected ranges.
    ///
    /// # Errors
    /// Returns all violations as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        check_range(
            &mut errors,
            "Cholesterol",
            self.cholesterol_mgdl,
            100.0,
            500.0,
        );
        check_range(
            &mut errors,
            "Stabilized glucose",
            self.stabilized_glucose_mgdl,
            40.0,
            400.0,
        );
        check_range(&mut errors, "HDL", self.hdl_mgdl, 10.0, 120.0);
        if !(18..=100).contains(&self.age_years) {
            errors.push(format!("Age {} out of range [18, 100]", self.age_years));
        }
        check_range(&mut errors, "Waist", self.waist_cm, 20.0, 150.0);
        check_range(&mut errors, "Hip", self.hip_cm, 20.0, 150.0);
        check_range(&mut errors, "Weight", self.weight_kg, 30.0, 200.0);
        check_range(&mut errors, "Height", self.height_cm, 100.0, 250.0);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_range(errors: &mut Vec<String>, label: &str, value: f64, min: f64, max: f64) {
    if !value.is_finite() {
        errors.push(format!("{label} is not a finite number"));
    } else if !(min..=max).contains(&value) {
        errors.push(format!("{label} {value} out of range [{min}, {max}]"));
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
    fn test_validation_passes_in_range() {
        assert!(typical().validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_violations() {
        let m = PatientMeasurements {
            cholesterol_mgdl: 50.0, // below 100
            hdl_mgdl: 500.0,        // above 120
            age_years: 10,          // below 18
            ..typical()
        };
        let errors = m.validate().expect_err("must fail");
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_validation_rejects_non_finite() {
        let m = PatientMeasurements {
            weight_kg: f64::NAN,
            ..typical()
        };
        let errors = m.validate().expect_err("must fail");
        assert!(errors[0].contains("not a finite number"));
    }

    #[test]
    fn test_validation_accepts_bounds() {
        let m = PatientMeasurements {
            cholesterol_mgdl: 100.0,
            stabilized_glucose_mgdl: 400.0,
            hdl_mgdl: 10.0,
            age_years: 100,
            ..typical()
        };
        assert!(m.validate().is_ok());
    }
}
