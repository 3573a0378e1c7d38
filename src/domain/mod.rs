//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no external dependencies.
//! All types are serializable and implement strict validation.

mod features;
mod measurements;
mod risk;
mod screening;
pub mod units;

pub use features::{FeatureRecord, MeasurementError, FEATURE_NAMES};
pub use measurements::PatientMeasurements;
pub use risk::{RiskBand, DIABETIC_THRESHOLD, PREDIABETIC_THRESHOLD};
pub use screening::Screening;
