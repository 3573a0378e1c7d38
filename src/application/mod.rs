//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with the model port to implement
//! the screening use case.

mod screening;

pub use screening::ScreeningService;
