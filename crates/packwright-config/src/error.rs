//! Error types for configuration assembly.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read TypeScript config {}: {source}", .path.display())]
    TsConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TypeScript config {}: {source}", .path.display())]
    TsConfigParse {
        path: PathBuf,
        #[source]
        source: json5::Error,
    },

    #[error("configuration fragment is not serializable: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("merged configuration has an unexpected shape: {0}")]
    Deserialize(#[source] serde_json::Error),
}
