//! Adapters layer: Concrete implementations of ports.
//!
//! - `regressor`: glyhb regression from a JSON-exported artifact

pub mod regressor;

pub use regressor::GlyhbRegressor;
