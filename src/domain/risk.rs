//! Risk band classification of the predicted glyhb value.

use serde::{Deserialize, Serialize};

/// Glyhb threshold at and above which a result is classified diabetic-risk.
pub const DIABETIC_THRESHOLD: f64 = 6.5;

/// Glyhb threshold at and above which a result is classified pre-diabetic.
pub const PREDIABETIC_THRESHOLD: f64 = 5.7;

/// Risk band for a predicted glyhb (HbA1c) percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    /// glyhb < 5.7
    Normal,
    /// 5.7 <= glyhb < 6.5
    PreDiabetic,
    /// glyhb >= 6.5
    DiabeticRisk,
}

impl RiskBand {
    /// Classify a predicted glyhb value.
    ///
    /// Thresholds are evaluated highest-first; the bands are half-open, so
    /// boundary values land in the higher band (6.5 is diabetic-risk, 5.7 is
    /// pre-diabetic). Total over any finite real: implausible values such as
    /// negatives pass through the same thresholds unchanged.
    #[must_use]
    pub fn classify(glyhb: f64) -> Self {
        if glyhb >= DIABETIC_THRESHOLD {
            Self::DiabeticRisk
        } else if glyhb >= PREDIABETIC_THRESHOLD {
            Self::PreDiabetic
        } else {
            Self::Normal
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Normal => "Normal - Glyhb within healthy range",
            Self::PreDiabetic => "Pre-diabetic - Lifestyle review recommended",
            Self::DiabeticRisk => "Diabetic risk - Clinical follow-up advised",
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Normal => (16, 185, 129),       // Emerald (#10B981)
            Self::PreDiabetic => (251, 191, 36),  // Amber (#FBBF24)
            Self::DiabeticRisk => (244, 63, 94),  // Rose (#F43F5E)
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::PreDiabetic => write!(f, "PRE-DIABETIC"),
            Self::DiabeticRisk => write!(f, "DIABETIC RISK"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_bands() {
        assert_eq!(RiskBand::classify(4.8), RiskBand::Normal);
        assert_eq!(RiskBand::classify(6.0), RiskBand::PreDiabetic);
        assert_eq!(RiskBand::classify(7.2), RiskBand::DiabeticRisk);
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(RiskBand::classify(6.5), RiskBand::DiabeticRisk);
        assert_eq!(RiskBand::classify(6.4999), RiskBand::PreDiabetic);
        assert_eq!(RiskBand::classify(5.7), RiskBand::PreDiabetic);
        assert_eq!(RiskBand::classify(5.6999), RiskBand::Normal);
    }

    #[test]
    fn test_implausible_values_pass_through() {
        // No special handling outside physiological range.
        assert_eq!(RiskBand::classify(-3.0), RiskBand::Normal);
        assert_eq!(RiskBand::classify(42.0), RiskBand::DiabeticRisk);
    }
}
