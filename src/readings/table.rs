//! In-memory reading table with its key index
//!
//! The table owns both the rows (header at position 0) and the
//! `(date, signal_id) -> position` index, so the two cannot drift apart
//! between index build and write-back.

use std::collections::HashMap;

use super::columns::{COL_DATE, COL_SIGNAL_ID};

/// Composite table key: (`date`, `signal_id`) as canonical strings.
pub type ReadingKey = (String, String);

/// Rows of the readings sheet plus the key index over them.
#[derive(Debug)]
pub struct ReadingTable {
    rows: Vec<Vec<String>>,
    index: HashMap<ReadingKey, usize>,
}

impl ReadingTable {
    /// Wraps loaded sheet rows (header first) and builds the index.
    ///
    /// Rows with an empty `date` or `signal_id` are not indexed. If the
    /// sheet already contains duplicate keys (e.g. from manual edits),
    /// the later row wins: earlier duplicates become unreachable by key
    /// lookup but stay in the table. Upserts never delete rows.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let mut index = HashMap::new();
        for (pos, row) in rows.iter().enumerate().skip(1) {
            let date = row.get(COL_DATE).map(String::as_str).unwrap_or("");
            let signal_id = row.get(COL_SIGNAL_ID).map(String::as_str).unwrap_or("");
            if !date.is_empty() && !signal_id.is_empty() {
                index.insert((date.to_string(), signal_id.to_string()), pos);
            }
        }
        Self { rows, index }
    }

    /// Position of the row holding `key`, if any.
    pub fn lookup(&self, key: &ReadingKey) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Replaces the row at `key` or appends a new one.
    ///
    /// Appended rows are indexed immediately, so a later candidate in the
    /// same batch with the same key updates instead of duplicating.
    /// Returns true on insert, false on in-place update.
    pub fn upsert_cells(&mut self, key: ReadingKey, cells: Vec<String>) -> bool {
        match self.index.get(&key) {
            Some(&pos) => {
                self.rows[pos] = cells;
                false
            }
            None => {
                self.rows.push(cells);
                self.index.insert(key, self.rows.len() - 1);
                true
            }
        }
    }

    /// Number of data rows (header excluded).
    pub fn data_len(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Consumes the table back into sheet rows for write-back.
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}
