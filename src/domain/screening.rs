//! Screening result types.
//!
//! A screening is the outcome of one prediction cycle: the derived feature
//! record, the model's glyhb estimate and its risk band. Screenings are
//! created fresh per request and never persisted.

use serde::{Deserialize, Serialize};

use super::features::FeatureRecord;
use super::risk::RiskBand;

/// Complete screening record for one prediction cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Screening {
    /// Unique identifier
    pub id: String,

    /// The feature record submitted to the model
    pub record: FeatureRecord,

    /// Predicted glyhb (HbA1c) in percent
    pub glyhb: f64,

    /// Risk classification of the prediction
    pub risk_band: RiskBand,

    /// Timestamp of the screening
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Screening {
    /// Create a new screening from a feature record and model prediction.
    #[must_use]
    pub fn new(record: FeatureRecord, glyhb: f64) -> Self {
        Self {
            id: uuid_v4(),
            record,
            glyhb,
            risk_band: RiskBand::classify(glyhb),
            created_at: chrono::Utc::now(),
        }
    }
}

/// Generate a simple UUID v4 (random) using CSPRNG.
///
/// Uses ChaCha20Rng seeded from OS entropy so identifiers are unpredictable
/// on all platforms.
fn uuid_v4() -> String {
    use rand::Rng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    let mut rng = ChaCha20Rng::from_entropy();
    let bytes: [u8; 16] = rng.gen();

    format!(
        "{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3],
        bytes[4], bytes[5],
        (bytes[6] & 0x0f) | 0x40, bytes[7],
        (bytes[8] & 0x3f) | 0x80, bytes[9],
        bytes[10], bytes[11], bytes[12], bytes[13], bytes[14], bytes[15]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_screening_classifies_prediction() {
        let screening = Screening::new(record(), 6.8);
        assert_eq!(screening.risk_band, RiskBand::DiabeticRisk);
        assert!((screening.glyhb - 6.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_uuid_generation() {
        let id1 = uuid_v4();
        let id2 = uuid_v4();
        assert_ne!(id1, id2);
        assert_eq!(id1.len(), 36); // UUID format with dashes
    }
}
