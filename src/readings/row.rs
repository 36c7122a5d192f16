//! Reading row type and cell conversion

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingSource {
    Ui,
    ExcelUpload,
}

impl ReadingSource {
    /// Returns the wire string written into the `source` column.
    pub fn as_str(self) -> &'static str {
        match self {
            ReadingSource::Ui => "ui",
            ReadingSource::ExcelUpload => "excel_upload",
        }
    }
}

impl fmt::Display for ReadingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded value, one per signal per calendar day.
///
/// All cells are semantically strings; an absent cell is the empty string.
/// `group_name` and `signal_label` are snapshots of the config at write
/// time and are not kept in sync with later renames. Only `date` and
/// `signal_id` form the table key; a row missing either is malformed and
/// silently dropped by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingRow {
    pub date: String,
    pub group_id: String,
    pub group_name: String,
    pub signal_id: String,
    pub signal_label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    pub unit: String,
    pub source: String,
    pub created_at: String,
}

impl ReadingRow {
    /// The composite table key, or None when the row is malformed.
    pub fn key(&self) -> Option<(String, String)> {
        if self.date.is_empty() || self.signal_id.is_empty() {
            return None;
        }
        Some((self.date.clone(), self.signal_id.clone()))
    }

    /// Cells in [`READING_COLUMNS`] order.
    pub fn to_cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.group_id.clone(),
            self.group_name.clone(),
            self.signal_id.clone(),
            self.signal_label.clone(),
            self.kind.clone(),
            self.value.clone(),
            self.unit.clone(),
            self.source.clone(),
            self.created_at.clone(),
        ]
    }

    /// Rebuilds a row from stored cells. Short rows pad with empty strings.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        Self {
            date: cell(0),
            group_id: cell(1),
            group_name: cell(2),
            signal_id: cell(3),
            signal_label: cell(4),
            kind: cell(5),
            value: cell(6),
            unit: cell(7),
            source: cell(8),
            created_at: cell(9),
        }
    }
}
