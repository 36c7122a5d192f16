//! Reading Store subsystem for dailysignals
//!
//! The reading store owns the persisted table of readings and is the only
//! component with a real invariant to maintain: at most one reading per
//! (date, signal_id) pair. It builds a key index over the loaded table,
//! merges candidate rows under that invariant, and reports how many rows
//! were inserted versus updated.
//!
//! # Design Principles
//!
//! - Whole-file read, mutate, whole-file overwrite (no streaming I/O)
//! - The table and its key index live in one owning structure
//! - Malformed candidate rows are dropped locally, never fail the batch
//! - Pre-existing duplicate keys are tolerated: last row wins in the
//!   index, earlier duplicates are orphaned but never deleted

mod builder;
mod columns;
mod errors;
mod row;
mod store;
mod table;
mod workbook;

pub use builder::{build_rows, parse_value, SignalValue, ValueParseError};
pub use columns::{header_row, COL_DATE, COL_SIGNAL_ID, READINGS_SHEET, READING_COLUMNS};
pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use row::{ReadingRow, ReadingSource};
pub use store::{ReadingStore, UpsertOutcome};
pub use table::{ReadingKey, ReadingTable};
pub use workbook::Workbook;
