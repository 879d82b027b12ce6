//! Error handling for the CLI tasks.
//!
//! `TaskError` is the error type every task returns. Variants convert
//! automatically from the domain errors via `#[from]`, and each message
//! carries a hint where there is an obvious next step for the user.
//! `task_error_to_miette` adapts the result for terminal reporting.

use std::path::PathBuf;

use miette::Report;
use thiserror::Error;

use packwright_config::ConfigError;

/// Top-level error type for CLI tasks.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Errors from context resolution and configuration composition.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The override layers could not be combined or extracted.
    #[error("Override error: {0}\n\nHint: Check packwright.toml and PACKWRIGHT_* environment variables")]
    Overrides(#[from] figment::Error),

    /// The composed configuration could not be written to disk.
    #[error("Failed to write {}: {source}\n\nHint: Check that the output directory exists and is writable", .path.display())]
    Emit {
        /// Destination passed via `--out`.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization of the composed configuration failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `TaskError` as the default error type.
pub type Result<T, E = TaskError> = std::result::Result<T, E>;

/// Convert a `TaskError` to a miette `Report`.
pub fn task_error_to_miette(err: TaskError) -> Report {
    match err {
        TaskError::Config(e) => miette::miette!("Configuration error: {}", e),
        TaskError::Emit { path, source } => miette::miette!(
            "Failed to write {}: {}\n\nHint: Check that the output directory exists and is writable",
            path.display(),
            source
        ),
        other => miette::miette!("{}", other),
    }
}
