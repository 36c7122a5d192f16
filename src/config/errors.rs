//! Configuration error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration load/save errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Failed to write config {path}: {source}")]
    Write {
        path: PathBuf,
        source: io::Error,
    },

    #[error("Config {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to encode config: {source}")]
    Encode { source: serde_json::Error },
}
