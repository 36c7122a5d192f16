//! dailysignals CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Dispatches to CLI commands (via cli::run)
//! 3. Logs the failure as a structured event on stderr
//! 4. Exits with non-zero on failure
//!
//! All logic is delegated to the CLI module.

use dailysignals::cli;
use dailysignals::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        Logger::error("COMMAND_FAILED", &[("error", &e.to_string())]);
        std::process::exit(1);
    }
}
