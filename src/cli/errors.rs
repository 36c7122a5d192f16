//! CLI-specific error types
//!
//! Every CLI error aborts the command; main prints it and exits non-zero.
//! Subsystem errors pass through unmodified.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::readings::{StoreError, ValueParseError};

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Unknown signal type '{0}' (expected quantity, yesno, time, hours, number or text)")]
    UnknownSignalType(String),

    #[error("No group matches '{0}'")]
    GroupNotFound(String),

    #[error("No active signal matches '{0}'")]
    SignalNotFound(String),

    #[error("Invalid assignment '{0}', expected <signal-id-or-label>=<value>")]
    BadAssignment(String),

    #[error("Value for '{label}': {source}")]
    BadValue {
        label: String,
        source: ValueParseError,
    },

    #[error("Failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },

    #[error("{path} is not a valid readings file: {source}")]
    MalformedImport {
        path: PathBuf,
        source: serde_json::Error,
    },
}
