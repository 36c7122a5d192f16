//! Reading store: table bootstrap and keyed upsert
//!
//! Enforces one reading per (date, signal_id). Candidates with an
//! existing key replace that row's cells; the rest are appended. The
//! whole workbook is rewritten on every upsert, matching the durability
//! level of the config store (whole-file overwrite, no atomic-rename
//! guarantee, single local writer).

use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};

use super::columns::{header_row, READINGS_SHEET};
use super::errors::{StoreError, StoreResult};
use super::row::ReadingRow;
use super::table::ReadingTable;
use super::workbook::Workbook;

/// Counts returned by [`ReadingStore::upsert`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertOutcome {
    pub inserted: usize,
    pub updated: usize,
}

/// Handle to the readings workbook at a fixed path.
#[derive(Debug, Clone)]
pub struct ReadingStore {
    path: PathBuf,
}

impl ReadingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Guarantees that the workbook exists and the readings sheet has a
    /// header row. Idempotent and cheap enough to run before every save.
    ///
    /// An existing header is trusted as-is: this only guarantees presence,
    /// it never validates or rewrites header contents.
    pub fn ensure_table(&self) -> StoreResult<()> {
        if !self.path.exists() {
            let mut workbook = Workbook::default();
            workbook
                .sheets
                .insert(READINGS_SHEET.to_string(), vec![header_row()]);
            return workbook.save(&self.path);
        }

        let mut workbook = Workbook::load(&self.path)?;
        match workbook.sheet_mut(READINGS_SHEET) {
            None => {
                workbook
                    .sheets
                    .insert(READINGS_SHEET.to_string(), vec![header_row()]);
                workbook.save(&self.path)
            }
            Some(rows) if rows.is_empty() => {
                rows.push(header_row());
                workbook.save(&self.path)
            }
            Some(_) => Ok(()),
        }
    }

    /// Merges candidate rows into the table under the one-row-per-key
    /// invariant and reports how many were inserted versus updated.
    ///
    /// Candidates without a `created_at` get one shared timestamp captured
    /// once per call. Candidates missing `date` or `signal_id` are dropped
    /// silently and excluded from both counts. An update overwrites every
    /// cell of the existing row, `created_at` included when the candidate
    /// carries one.
    pub fn upsert(&self, rows: &[ReadingRow]) -> StoreResult<UpsertOutcome> {
        self.ensure_table()?;

        let mut workbook = Workbook::load(&self.path)?;
        let sheet = workbook.sheets.remove(READINGS_SHEET).ok_or_else(|| {
            StoreError::malformed_table(format!(
                "Sheet '{}' missing after bootstrap in {}",
                READINGS_SHEET,
                self.path.display()
            ))
        })?;
        let mut table = ReadingTable::from_rows(sheet);

        let now = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        let mut outcome = UpsertOutcome::default();

        for candidate in rows {
            let mut row = candidate.clone();
            if row.created_at.is_empty() {
                row.created_at = now.clone();
            }

            let Some(key) = row.key() else {
                continue; // malformed row, dropped without failing the batch
            };

            if table.upsert_cells(key, row.to_cells()) {
                outcome.inserted += 1;
            } else {
                outcome.updated += 1;
            }
        }

        workbook
            .sheets
            .insert(READINGS_SHEET.to_string(), table.into_rows());
        workbook.save(&self.path)?;

        Ok(outcome)
    }

    /// Loads all data rows of the readings sheet, in table order.
    pub fn load_rows(&self) -> StoreResult<Vec<ReadingRow>> {
        self.ensure_table()?;

        let workbook = Workbook::load(&self.path)?;
        let rows = workbook.sheet(READINGS_SHEET).map(Vec::as_slice).unwrap_or(&[]);
        Ok(rows
            .iter()
            .skip(1)
            .map(|cells| ReadingRow::from_cells(cells))
            .collect())
    }
}
