//! Workbook persistence
//!
//! The readings file is a JSON workbook: named sheets, each an ordered
//! sequence of rows of string cells. It is read fully into memory and
//! rewritten fully on save; there is no partial I/O and no locking
//! (single local user, last writer wins across processes).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};

/// A file of named sheets of string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub sheets: BTreeMap<String, Vec<Vec<String>>>,
}

impl Workbook {
    /// Reads the workbook at `path`.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::read_failed(
                format!("Failed to read workbook: {}", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            StoreError::malformed_table(format!(
                "Workbook {} is not valid JSON: {}",
                path.display(),
                e
            ))
        })
    }

    /// Writes the whole workbook to `path`, pretty-printed, creating
    /// parent directories as needed.
    pub fn save(&self, path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::io_error(
                    format!("Failed to create data directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let serialized = serde_json::to_string_pretty(self).map_err(|e| {
            StoreError::malformed_table(format!("Failed to encode workbook: {}", e))
        })?;

        fs::write(path, serialized).map_err(|e| {
            StoreError::write_failed(
                format!("Failed to write workbook: {}", path.display()),
                e,
            )
        })
    }

    pub fn sheet(&self, name: &str) -> Option<&Vec<Vec<String>>> {
        self.sheets.get(name)
    }

    pub fn sheet_mut(&mut self, name: &str) -> Option<&mut Vec<Vec<String>>> {
        self.sheets.get_mut(name)
    }
}
