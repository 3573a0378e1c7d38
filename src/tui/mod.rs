//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinical-themed interface for:
//! - Patient measurement entry with alternate-unit toggles
//! - Screening results with risk banding

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::ClinicTheme;
