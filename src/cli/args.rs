//! CLI argument definitions using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use chrono::NaiveDate;

/// dailysignals - track grouped daily metrics in plain files
#[derive(Parser, Debug)]
#[command(name = "dailysignals")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Data directory holding config.json and the readings workbook
    #[arg(long, default_value = "./data", global = true)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory with a default config and readings table
    Init,

    /// List signal groups and their signals
    Groups,

    /// Add a signal group
    AddGroup {
        /// Group name, e.g. GYM, Spending, Diet
        name: String,
    },

    /// Add a signal to a group
    AddSignal {
        /// Group to add to, matched by id or name
        #[arg(long)]
        group: String,

        /// Signal label, e.g. "Cardio duration"
        #[arg(long)]
        label: String,

        /// Signal type: quantity, yesno, time, hours, number or text
        #[arg(long = "type", default_value = "text")]
        kind: String,

        /// Unit, only meaningful for quantity/hours/number
        #[arg(long)]
        unit: Option<String>,

        /// Mark the signal as required (advisory)
        #[arg(long)]
        required: bool,
    },

    /// Rename a group; its id and recorded history stay untouched
    RenameGroup {
        /// Group matched by id or current name
        group: String,

        /// New name
        name: String,
    },

    /// Change a signal's label; its id and recorded history stay untouched
    RelabelSignal {
        /// Signal matched by id or current label
        signal: String,

        /// New label
        label: String,
    },

    /// Change a signal's type; a unit that does not fit the new type is dropped
    RetypeSignal {
        /// Signal matched by id or label
        signal: String,

        /// New type: quantity, yesno, time, hours, number or text
        #[arg(long = "type")]
        kind: String,

        /// Unit, only meaningful for quantity/hours/number
        #[arg(long)]
        unit: Option<String>,
    },

    /// Soft-delete a group, keeping its history
    DisableGroup {
        /// Group matched by id or name
        group: String,
    },

    /// Soft-delete a signal, keeping its history
    DisableSignal {
        /// Signal matched by id or label
        signal: String,
    },

    /// Record readings for one calendar date
    Record {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Signal assignment, repeatable: --set <signal-id-or-label>=<value>
        #[arg(long = "set", value_name = "SIGNAL=VALUE")]
        set: Vec<String>,
    },

    /// Import prebuilt reading rows from a JSON file
    Import {
        /// JSON file holding an array of reading rows
        file: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
