use anyhow::{bail, Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    /// Leave the form filled in when a save is rejected instead of clearing it.
    pub(crate) keep_draft_on_reject: bool,
    pub(crate) log_path: Option<PathBuf>,
    pub(crate) log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            keep_draft_on_reject: false,
            log_path: None,
            log_level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Launch {
    Tui(Settings),
    Help,
    Version,
}

const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

impl Settings {
    /// Parse command-line arguments, excluding the program name.
    pub(crate) fn from_args(args: &[String]) -> Result<Launch> {
        let mut settings = Settings::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--help" | "-h" | "help" => return Ok(Launch::Help),
                "--version" | "-V" | "version" => return Ok(Launch::Version),
                "--keep-draft" => settings.keep_draft_on_reject = true,
                "--log" => {
                    let path = iter.next().context("--log needs a file path")?;
                    settings.log_path = Some(PathBuf::from(shellexpand(path)));
                }
                "--log-level" => {
                    let level = iter.next().context("--log-level needs a value")?;
                    let level = level.to_ascii_lowercase();
                    if !LEVELS.contains(&level.as_str()) {
                        bail!(
                            "Unknown log level: {level} (expected one of {})",
                            LEVELS.join(", ")
                        );
                    }
                    settings.log_level = level;
                }
                other => bail!("Unknown argument: {other}"),
            }
        }
        Ok(Launch::Tui(settings))
    }
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod settings_tests;
