use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Install a file-backed subscriber when `--log` was given.
///
/// The terminal is owned by the UI, so without a log path nothing is installed
/// and all events are dropped.
pub(crate) fn init(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter = EnvFilter::try_new(format!("ahorra={}", settings.log_level))
        .with_context(|| format!("Invalid log level: {}", settings.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))?;

    Ok(())
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod logging_tests;
