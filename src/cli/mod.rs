//! CLI module for dailysignals
//!
//! Provides the command-line surface:
//! - init: create the data directory, default config and readings table
//! - groups / add-group / add-signal / disable-group / disable-signal:
//!   schema editing with soft deletes
//! - record: build rows for one date and upsert them
//! - import: upsert prebuilt rows from a JSON file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
