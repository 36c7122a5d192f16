//! CLI command implementations
//!
//! Each command is a full load-edit-save cycle against one or both
//! persisted artifacts. The config document is loaded fresh per command
//! and saved explicitly; nothing is cached between commands.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};

use crate::config::{self, Document, Signal, SignalGroup, SignalType};
use crate::observability::Logger;
use crate::paths;
use crate::readings::{build_rows, parse_value, ReadingRow, ReadingSource, ReadingStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args())
}

/// Dispatch a parsed command
pub fn run_command(cli: Cli) -> CliResult<()> {
    let data_dir = cli.data_dir.as_path();
    match cli.command {
        Command::Init => init(data_dir),
        Command::Groups => groups(data_dir),
        Command::AddGroup { name } => add_group(data_dir, &name),
        Command::AddSignal {
            group,
            label,
            kind,
            unit,
            required,
        } => add_signal(data_dir, &group, &label, &kind, unit, required),
        Command::RenameGroup { group, name } => rename_group(data_dir, &group, &name),
        Command::RelabelSignal { signal, label } => relabel_signal(data_dir, &signal, &label),
        Command::RetypeSignal { signal, kind, unit } => {
            retype_signal(data_dir, &signal, &kind, unit)
        }
        Command::DisableGroup { group } => disable_group(data_dir, &group),
        Command::DisableSignal { signal } => disable_signal(data_dir, &signal),
        Command::Record { date, set } => record(data_dir, date, &set),
        Command::Import { file } => import(data_dir, &file),
    }
}

fn init(data_dir: &Path) -> CliResult<()> {
    let config_path = paths::config_path(data_dir);
    let creating = !config_path.exists();

    let doc = config::store::load(&config_path)?;
    if creating {
        Logger::info(
            "CONFIG_CREATED",
            &[("path", &config_path.display().to_string())],
        );
    }

    let store = ReadingStore::new(paths::readings_path(data_dir));
    store.ensure_table()?;
    Logger::info(
        "TABLE_BOOTSTRAPPED",
        &[("path", &store.path().display().to_string())],
    );

    println!(
        "Initialized {} ({} signal groups)",
        data_dir.display(),
        doc.signal_groups.len()
    );
    Ok(())
}

fn groups(data_dir: &Path) -> CliResult<()> {
    let doc = config::store::load(&paths::config_path(data_dir))?;

    if doc.signal_groups.is_empty() {
        println!("No signal groups yet. Add one with 'dailysignals add-group <name>'.");
        return Ok(());
    }

    for group in &doc.signal_groups {
        let marker = if group.active.is_active() {
            "active"
        } else {
            "disabled"
        };
        println!("{}  [{}]  ({})", group.name, marker, group.id);
        for signal in &group.signals {
            let unit = signal
                .signal_type
                .unit()
                .map(|u| format!(", {}", u))
                .unwrap_or_default();
            let state = if signal.active.is_active() {
                ""
            } else {
                "  [disabled]"
            };
            println!(
                "  - {} [{}{}]{}  ({})",
                signal.label,
                signal.signal_type.tag(),
                unit,
                state,
                signal.id
            );
        }
    }
    Ok(())
}

fn add_group(data_dir: &Path, name: &str) -> CliResult<()> {
    let config_path = paths::config_path(data_dir);
    let mut doc = config::store::load(&config_path)?;

    let id = doc.add_group(name.trim());
    config::store::save(&config_path, &doc)?;

    println!("Added group '{}' ({})", name.trim(), id);
    Ok(())
}

fn add_signal(
    data_dir: &Path,
    group: &str,
    label: &str,
    kind: &str,
    unit: Option<String>,
    required: bool,
) -> CliResult<()> {
    let unit_given = unit.is_some();
    let signal_type = SignalType::from_tag(kind, unit)
        .ok_or_else(|| CliError::UnknownSignalType(kind.to_string()))?;
    if unit_given && !signal_type.bears_unit() {
        Logger::warn("UNIT_IGNORED", &[("type", signal_type.tag())]);
    }

    let config_path = paths::config_path(data_dir);
    let mut doc = config::store::load(&config_path)?;

    let group = find_group_mut(&mut doc, group)?;
    let signal = Signal::new(label.trim(), signal_type, required);
    let id = signal.id.clone();
    group.signals.push(signal);

    config::store::save(&config_path, &doc)?;
    println!("Added signal '{}' ({})", label.trim(), id);
    Ok(())
}

fn rename_group(data_dir: &Path, group: &str, name: &str) -> CliResult<()> {
    let config_path = paths::config_path(data_dir);
    let mut doc = config::store::load(&config_path)?;

    let group = find_group_mut(&mut doc, group)?;
    let old = group.name.clone();
    group.rename(name.trim());

    config::store::save(&config_path, &doc)?;
    println!(
        "Renamed group '{}' to '{}' (recorded rows keep the old name)",
        old,
        name.trim()
    );
    Ok(())
}

fn relabel_signal(data_dir: &Path, signal: &str, label: &str) -> CliResult<()> {
    let config_path = paths::config_path(data_dir);
    let mut doc = config::store::load(&config_path)?;

    let signal = doc
        .find_signal_mut(signal)
        .ok_or_else(|| CliError::SignalNotFound(signal.to_string()))?;
    let old = signal.label.clone();
    signal.relabel(label.trim());

    config::store::save(&config_path, &doc)?;
    println!(
        "Relabeled signal '{}' to '{}' (recorded rows keep the old label)",
        old,
        label.trim()
    );
    Ok(())
}

fn retype_signal(
    data_dir: &Path,
    signal: &str,
    kind: &str,
    unit: Option<String>,
) -> CliResult<()> {
    let unit_given = unit.is_some();
    let signal_type = SignalType::from_tag(kind, unit)
        .ok_or_else(|| CliError::UnknownSignalType(kind.to_string()))?;
    if unit_given && !signal_type.bears_unit() {
        Logger::warn("UNIT_IGNORED", &[("type", signal_type.tag())]);
    }

    let config_path = paths::config_path(data_dir);
    let mut doc = config::store::load(&config_path)?;

    let signal = doc
        .find_signal_mut(signal)
        .ok_or_else(|| CliError::SignalNotFound(signal.to_string()))?;
    signal.retype(signal_type);
    let label = signal.label.clone();
    let tag = signal.signal_type.tag();

    config::store::save(&config_path, &doc)?;
    println!("Retyped signal '{}' to {}", label, tag);
    Ok(())
}

fn disable_group(data_dir: &Path, group: &str) -> CliResult<()> {
    let config_path = paths::config_path(data_dir);
    let mut doc = config::store::load(&config_path)?;

    let group = find_group_mut(&mut doc, group)?;
    group.disable();
    let name = group.name.clone();

    config::store::save(&config_path, &doc)?;
    println!("Disabled group '{}' (soft delete, history kept)", name);
    Ok(())
}

fn disable_signal(data_dir: &Path, signal: &str) -> CliResult<()> {
    let config_path = paths::config_path(data_dir);
    let mut doc = config::store::load(&config_path)?;

    let found = doc
        .find_signal_mut(signal)
        .ok_or_else(|| CliError::SignalNotFound(signal.to_string()))?;
    found.disable();
    let label = found.label.clone();

    config::store::save(&config_path, &doc)?;
    println!("Disabled signal '{}' (soft delete, history kept)", label);
    Ok(())
}

fn record(data_dir: &Path, date: Option<NaiveDate>, assignments: &[String]) -> CliResult<()> {
    let doc = config::store::load(&paths::config_path(data_dir))?;
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let mut values = HashMap::new();
    for assignment in assignments {
        let (needle, raw) = assignment
            .split_once('=')
            .ok_or_else(|| CliError::BadAssignment(assignment.clone()))?;

        let signal = find_active_signal(&doc, needle.trim())?;
        let value = parse_value(&signal.signal_type, raw).map_err(|e| CliError::BadValue {
            label: signal.label.clone(),
            source: e,
        })?;
        values.insert(signal.id.clone(), value);
    }

    let mut rows = build_rows(&doc, date, &values);
    // Only persist signals that were set; untouched signals on this date
    // must not be clobbered with empty values.
    rows.retain(|row| values.contains_key(&row.signal_id));

    let store = ReadingStore::new(paths::readings_path(data_dir));
    let outcome = store.upsert(&rows)?;

    Logger::info(
        "READINGS_UPSERTED",
        &[
            ("date", &date.format("%Y-%m-%d").to_string()),
            ("inserted", &outcome.inserted.to_string()),
            ("updated", &outcome.updated.to_string()),
        ],
    );
    println!(
        "{}: {} inserted, {} updated",
        date.format("%Y-%m-%d"),
        outcome.inserted,
        outcome.updated
    );
    Ok(())
}

fn import(data_dir: &Path, file: &Path) -> CliResult<()> {
    let content = fs::read_to_string(file).map_err(|e| CliError::Io {
        path: file.to_path_buf(),
        source: e,
    })?;
    let mut rows: Vec<ReadingRow> =
        serde_json::from_str(&content).map_err(|e| CliError::MalformedImport {
            path: file.to_path_buf(),
            source: e,
        })?;

    for row in &mut rows {
        if row.source.is_empty() {
            row.source = ReadingSource::ExcelUpload.as_str().to_string();
        }
    }

    let store = ReadingStore::new(paths::readings_path(data_dir));
    let outcome = store.upsert(&rows)?;

    Logger::info(
        "READINGS_UPSERTED",
        &[
            ("file", &file.display().to_string()),
            ("inserted", &outcome.inserted.to_string()),
            ("updated", &outcome.updated.to_string()),
        ],
    );
    println!(
        "Imported {}: {} inserted, {} updated",
        file.display(),
        outcome.inserted,
        outcome.updated
    );
    Ok(())
}

fn find_group_mut<'a>(doc: &'a mut Document, needle: &str) -> CliResult<&'a mut SignalGroup> {
    doc.signal_groups
        .iter_mut()
        .find(|g| g.id == needle || g.name == needle)
        .ok_or_else(|| CliError::GroupNotFound(needle.to_string()))
}

fn find_active_signal<'a>(doc: &'a Document, needle: &str) -> CliResult<&'a Signal> {
    doc.active_groups()
        .flat_map(|g| g.active_signals())
        .find(|s| s.id == needle || s.label == needle)
        .ok_or_else(|| CliError::SignalNotFound(needle.to_string()))
}
