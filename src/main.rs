//! Glyscreen: glyhb screening pipeline.
//!
//! Main entry point for the terminal application. Acts as the composition
//! root: the model artifact is loaded here, once, into an owned handle and
//! injected into the screening service.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use glyscreen::adapters::GlyhbRegressor;
use glyscreen::application::ScreeningService;
use glyscreen::tui::App;

fn main() -> Result<()> {
    // Initialize logging.
    //
    // Writing logs to the terminal would corrupt the TUI (alternate screen).
    // Default behavior:
    // - interactive TTY: log to a file
    // - non-interactive: log to stdout
    let log_mode =
        std::env::var("GLYSCREEN_LOG_MODE").unwrap_or_else(|_| "auto".to_string());

    let interactive = std::io::stdout().is_terminal();
    let use_file = match log_mode.as_str() {
        "file" => true,
        "stdout" => false,
        // auto
        _ => interactive,
    };

    let (writer, _guard) = if use_file {
        let log_file = std::env::var("GLYSCREEN_LOG_FILE")
            .unwrap_or_else(|_| "glyscreen.log".to_string());

        if let Some(parent) = std::path::Path::new(&log_file).parent() {
            // Best-effort: don't fail startup just because the directory is missing.
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)?;
        tracing_appender::non_blocking(file)
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(writer))
        .init();

    tracing::info!("Starting glyscreen...");

    // Load the model artifact from the configured path.
    let model_path =
        std::env::var("GLYSCREEN_MODEL_PATH").unwrap_or_else(|_| "models".to_string());
    let model_dir = std::path::Path::new(&model_path);

    if !model_dir.exists() {
        return Err(anyhow!(
            "Model path not found at {:?}. Set GLYSCREEN_MODEL_PATH to a directory containing glyhb_model.json or model.json.",
            model_dir
        ));
    }

    let model = GlyhbRegressor::load(model_dir)
        .map_err(|e| anyhow!("Failed to load model from {:?}: {}", model_dir, e))?;

    let service = ScreeningService::new(Arc::new(model));

    let mut app = App::new(service);
    app.run()?;

    tracing::info!("Glyscreen shutdown complete.");
    Ok(())
}
