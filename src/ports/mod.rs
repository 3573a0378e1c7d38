//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the application and the external inference engine.

mod model;

pub use model::{GlyhbModel, ModelError};
