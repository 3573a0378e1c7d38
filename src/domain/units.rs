//! Unit conversions between user-facing units and the model's canonical
//! units (kg, cm, mg/dL).
//!
//! All conversions are pure, total functions over finite non-negative input.
//! No domain validation happens here; measurement bounds are enforced by
//! `PatientMeasurements::validate`.

use super::MeasurementError;

/// Canonical pounds → kilograms factor.
///
/// Historical revisions of the pipeline mixed `* 0.453592` and `/ 2.2046`,
/// which differ in the 4th decimal place. `0.453592` is the single canonical
/// constant; the inverse conversion divides by the same constant so
/// round-trips are exact to floating-point precision.
pub const KG_PER_POUND: f64 = 0.453592;

/// Inches → centimeters (exact by definition).
pub const CM_PER_INCH: f64 = 2.54;

/// Glucose mmol/L → mg/dL. Canonicalized to 18.018 (glucose molar mass
/// 180.18 g/mol); the rounded 18.0 variant is not used.
pub const GLUCOSE_MGDL_PER_MMOL: f64 = 18.018;

/// Cholesterol mmol/L → mg/dL.
pub const CHOLESTEROL_MGDL_PER_MMOL: f64 = 38.67;

/// A unit conversion kind accepted by [`convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Body weight: pounds → kilograms
    PoundsToKilograms,
    /// Height / circumference: inches → centimeters
    InchesToCentimeters,
    /// Blood glucose: mmol/L → mg/dL
    GlucoseMmolToMgdl,
    /// Cholesterol (total or HDL): mmol/L → mg/dL
    CholesterolMmolToMgdl,
}

impl Conversion {
    /// The user-facing name of the alternate (source) unit.
    #[must_use]
    pub fn source_unit(&self) -> &'static str {
        match self {
            Self::PoundsToKilograms => "lbs",
            Self::InchesToCentimeters => "in",
            Self::GlucoseMmolToMgdl | Self::CholesterolMmolToMgdl => "mmol/L",
        }
    }
}

/// Apply a conversion to a finite value.
///
/// # Errors
/// Returns `MeasurementError::InvalidInput` if `value` is NaN or infinite,
/// so non-finite input never silently propagates into the feature pipeline.
pub fn convert(value: f64, kind: Conversion) -> Result<f64, MeasurementError> {
    if !value.is_finite() {
        return Err(MeasurementError::InvalidInput(format!(
            "non-finite value {value} for {kind:?}"
        )));
    }
    Ok(match kind {
        Conversion::PoundsToKilograms => pounds_to_kg(value),
        Conversion::InchesToCentimeters => inches_to_cm(value),
        Conversion::GlucoseMmolToMgdl => glucose_mmol_to_mgdl(value),
        Conversion::CholesterolMmolToMgdl => cholesterol_mmol_to_mgdl(value),
    })
}

/// Body weight: pounds → kilograms.
#[must_use]
pub fn pounds_to_kg(lbs: f64) -> f64 {
    lbs * KG_PER_POUND
}

/// Body weight: kilograms → pounds (inverse of [`pounds_to_kg`]).
#[must_use]
pub fn kg_to_pounds(kg: f64) -> f64 {
    kg / KG_PER_POUND
}

/// Length: inches → centimeters.
#[must_use]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Length: centimeters → inches (inverse of [`inches_to_cm`]).
#[must_use]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Blood glucose: mmol/L → mg/dL.
#[must_use]
pub fn glucose_mmol_to_mgdl(mmol: f64) -> f64 {
    mmol * GLUCOSE_MGDL_PER_MMOL
}

/// Cholesterol: mmol/L → mg/dL.
#[must_use]
pub fn cholesterol_mmol_to_mgdl(mmol: f64) -> f64 {
    mmol * CHOLESTEROL_MGDL_PER_MMOL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_conversion() {
        assert!((pounds_to_kg(154.0) - 69.853168).abs() < 1e-9);
        assert!((pounds_to_kg(0.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_length_conversion() {
        assert!((inches_to_cm(35.0) - 88.9).abs() < 1e-9);
        assert!((inches_to_cm(1.0) - 2.54).abs() < f64::EPSILON);
    }

    #[test]
    fn test_glucose_conversion() {
        // 5.55 mmol/L is roughly normal fasting glucose (~100 mg/dL)
        assert!((glucose_mmol_to_mgdl(5.55) - 99.9999).abs() < 1e-3);
    }

    #[test]
    fn test_cholesterol_conversion() {
        assert!((cholesterol_mmol_to_mgdl(5.17) - 199.9239).abs() < 1e-4);
    }

    #[test]
    fn test_round_trips() {
        for x in [1.0, 35.0, 70.5, 154.3] {
            assert!((cm_to_inches(inches_to_cm(x)) - x).abs() < 1e-9);
            assert!((kg_to_pounds(pounds_to_kg(x)) - x).abs() < 1e-9);
        }
    }

    #[test]
    fn test_convert_rejects_non_finite() {
        assert!(convert(f64::NAN, Conversion::PoundsToKilograms).is_err());
        assert!(convert(f64::INFINITY, Conversion::GlucoseMmolToMgdl).is_err());
        assert!(convert(f64::NEG_INFINITY, Conversion::InchesToCentimeters).is_err());
    }

    #[test]
    fn test_convert_dispatch() {
        let kg = convert(154.0, Conversion::PoundsToKilograms).expect("finite");
        assert!((kg - pounds_to_kg(154.0)).abs() < f64::EPSILON);
    }
}
