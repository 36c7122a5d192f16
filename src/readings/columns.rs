//! Fixed schema of the readings table

/// Name of the sheet holding the readings inside the workbook file.
pub const READINGS_SHEET: &str = "signal_readings";

/// Column names, in table order. The first row of the sheet is exactly
/// this header.
pub const READING_COLUMNS: [&str; 10] = [
    "date",         // YYYY-MM-DD
    "group_id",
    "group_name",   // snapshot at write time, never retro-synced
    "signal_id",
    "signal_label", // snapshot at write time, never retro-synced
    "type",         // quantity/yesno/time/hours/number/text
    "value",        // canonical string encoding
    "unit",
    "source",       // ui | excel_upload
    "created_at",   // ISO timestamp, set once at first insert
];

/// Offset of the `date` column.
pub const COL_DATE: usize = 0;

/// Offset of the `signal_id` column.
pub const COL_SIGNAL_ID: usize = 3;

/// The header as an owned row of cells.
pub fn header_row() -> Vec<String> {
    READING_COLUMNS.iter().map(|c| c.to_string()).collect()
}
