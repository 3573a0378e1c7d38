//! # Glyscreen
//!
//! Glycated hemoglobin (HbA1c) screening pipeline.
//!
//! This crate provides:
//! - Unit conversion from user-facing units (lbs, inches, mmol/L) to the
//!   model's canonical units (kg, cm, mg/dL)
//! - Derivation of the 8-field feature record (including ratio and BMI)
//!   consumed by a pre-trained glyhb regression model
//! - Threshold-based classification of the prediction into risk bands
//! - Terminal UI for local measurement entry
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (measurements, features, risk bands)
//! - `ports`: Trait definitions for the model inference boundary
//! - `adapters`: Concrete implementations (JSON-exported regressor)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{FeatureRecord, PatientMeasurements, RiskBand, Screening};
pub use ports::GlyhbModel;

/// Result type for Glyscreen operations
pub type Result<T> = std::result::Result<T, GlyscreenError>;

/// Main error type for Glyscreen
#[derive(Debug, thiserror::Error)]
pub enum GlyscreenError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Feature derivation failed: {0}")]
    Measurement(#[from] domain::MeasurementError),

    #[error("Model inference failed: {0}")]
    Model(#[from] ports::ModelError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
