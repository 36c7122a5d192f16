//! Config Editing Tests
//!
//! The schema-editing commands are load-edit-save cycles over the config
//! document:
//! - Rename/relabel/retype never touch ids, so recorded history keeps
//!   resolving (and keeps its denormalized snapshots)
//! - Retype moves the unit into or out of the type by construction
//! - Disable is a soft delete

use std::path::Path;

use tempfile::TempDir;

use dailysignals::cli::{run_command, Cli, CliError, Command};
use dailysignals::config::{self, Document, SignalType};
use dailysignals::paths;
use dailysignals::readings::ReadingStore;

// =============================================================================
// Test Utilities
// =============================================================================

fn run(data_dir: &Path, command: Command) -> Result<(), CliError> {
    run_command(Cli {
        data_dir: data_dir.to_path_buf(),
        command,
    })
}

fn load_doc(data_dir: &Path) -> Document {
    config::store::load(&paths::config_path(data_dir)).unwrap()
}

// =============================================================================
// Rename / Relabel / Retype
// =============================================================================

/// Renaming a group changes its name only; the id survives.
#[test]
fn test_rename_group_keeps_id() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), Command::AddGroup { name: "GYM".to_string() }).unwrap();
    let id = load_doc(dir.path()).signal_groups[0].id.clone();

    run(
        dir.path(),
        Command::RenameGroup {
            group: "GYM".to_string(),
            name: "Fitness".to_string(),
        },
    )
    .unwrap();

    let doc = load_doc(dir.path());
    assert_eq!(doc.signal_groups.len(), 1);
    assert_eq!(doc.signal_groups[0].name, "Fitness");
    assert_eq!(doc.signal_groups[0].id, id);
}

/// Relabeling a signal changes its label only; the id survives.
#[test]
fn test_relabel_signal_keeps_id() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), Command::AddGroup { name: "GYM".to_string() }).unwrap();
    run(
        dir.path(),
        Command::AddSignal {
            group: "GYM".to_string(),
            label: "Cardio".to_string(),
            kind: "quantity".to_string(),
            unit: Some("min".to_string()),
            required: false,
        },
    )
    .unwrap();
    let id = load_doc(dir.path()).signal_groups[0].signals[0].id.clone();

    run(
        dir.path(),
        Command::RelabelSignal {
            signal: "Cardio".to_string(),
            label: "Cardio duration".to_string(),
        },
    )
    .unwrap();

    let doc = load_doc(dir.path());
    let signal = &doc.signal_groups[0].signals[0];
    assert_eq!(signal.label, "Cardio duration");
    assert_eq!(signal.id, id);
    assert_eq!(signal.signal_type.unit(), Some("min"));
}

/// Retyping to a unitless type drops the unit; retyping back attaches a
/// new one. The persisted JSON carries no stray `unit` field in between.
#[test]
fn test_retype_signal_moves_unit_with_type() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), Command::AddGroup { name: "GYM".to_string() }).unwrap();
    run(
        dir.path(),
        Command::AddSignal {
            group: "GYM".to_string(),
            label: "Weight".to_string(),
            kind: "quantity".to_string(),
            unit: Some("kg".to_string()),
            required: false,
        },
    )
    .unwrap();

    run(
        dir.path(),
        Command::RetypeSignal {
            signal: "Weight".to_string(),
            kind: "text".to_string(),
            unit: None,
        },
    )
    .unwrap();

    let doc = load_doc(dir.path());
    assert_eq!(doc.signal_groups[0].signals[0].signal_type, SignalType::Text);

    let content = std::fs::read_to_string(paths::config_path(dir.path())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["signal_groups"][0]["signals"][0]["type"], "text");
    assert!(value["signal_groups"][0]["signals"][0].get("unit").is_none());

    run(
        dir.path(),
        Command::RetypeSignal {
            signal: "Weight".to_string(),
            kind: "hours".to_string(),
            unit: Some("hrs".to_string()),
        },
    )
    .unwrap();

    let doc = load_doc(dir.path());
    assert_eq!(doc.signal_groups[0].signals[0].signal_type.unit(), Some("hrs"));
}

/// An unknown type tag is rejected before the document is touched.
#[test]
fn test_retype_rejects_unknown_type() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), Command::AddGroup { name: "GYM".to_string() }).unwrap();
    run(
        dir.path(),
        Command::AddSignal {
            group: "GYM".to_string(),
            label: "Mood".to_string(),
            kind: "text".to_string(),
            unit: None,
            required: false,
        },
    )
    .unwrap();

    let err = run(
        dir.path(),
        Command::RetypeSignal {
            signal: "Mood".to_string(),
            kind: "emoji".to_string(),
            unit: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, CliError::UnknownSignalType(_)));

    let doc = load_doc(dir.path());
    assert_eq!(doc.signal_groups[0].signals[0].signal_type, SignalType::Text);
}

/// Renaming a group that does not exist is an error, not a silent no-op.
#[test]
fn test_rename_missing_group_fails() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), Command::Init).unwrap();

    let err = run(
        dir.path(),
        Command::RenameGroup {
            group: "nope".to_string(),
            name: "Still nope".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(err, CliError::GroupNotFound(_)));
}

// =============================================================================
// History Independence
// =============================================================================

/// Rows recorded before a rename keep their denormalized group_name
/// snapshot; config renames never rewrite history.
#[test]
fn test_rename_does_not_rewrite_recorded_rows() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), Command::AddGroup { name: "GYM".to_string() }).unwrap();
    run(
        dir.path(),
        Command::AddSignal {
            group: "GYM".to_string(),
            label: "Stretching".to_string(),
            kind: "yesno".to_string(),
            unit: None,
            required: false,
        },
    )
    .unwrap();

    run(
        dir.path(),
        Command::Record {
            date: Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            set: vec!["Stretching=yes".to_string()],
        },
    )
    .unwrap();

    run(
        dir.path(),
        Command::RenameGroup {
            group: "GYM".to_string(),
            name: "Mobility".to_string(),
        },
    )
    .unwrap();
    run(
        dir.path(),
        Command::RelabelSignal {
            signal: "Stretching".to_string(),
            label: "Morning stretch".to_string(),
        },
    )
    .unwrap();

    let store = ReadingStore::new(paths::readings_path(dir.path()));
    let rows = store.load_rows().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].group_name, "GYM");
    assert_eq!(rows[0].signal_label, "Stretching");
    assert_eq!(rows[0].value, "true");
}

// =============================================================================
// Soft Delete via CLI
// =============================================================================

/// Disabling through the CLI is a soft delete: the signal stays in the
/// document and drops out of the active view only.
#[test]
fn test_disable_signal_is_soft() {
    let dir = TempDir::new().unwrap();
    run(dir.path(), Command::AddGroup { name: "GYM".to_string() }).unwrap();
    run(
        dir.path(),
        Command::AddSignal {
            group: "GYM".to_string(),
            label: "Old metric".to_string(),
            kind: "number".to_string(),
            unit: None,
            required: false,
        },
    )
    .unwrap();

    run(
        dir.path(),
        Command::DisableSignal {
            signal: "Old metric".to_string(),
        },
    )
    .unwrap();

    let doc = load_doc(dir.path());
    let group = &doc.signal_groups[0];
    assert_eq!(group.signals.len(), 1);
    assert!(!group.signals[0].active.is_active());
    assert_eq!(group.active_signals().count(), 0);
}
