//! Row builder: turns a config document plus typed input values into
//! candidate reading rows with canonically encoded value strings.
//!
//! Canonical encoding: booleans become "true"/"false", times become
//! zero-padded HH:MM:SS, amounts their plain decimal form, absent values
//! the empty string. The store consumes the encoded values as opaque
//! strings.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::config::{Document, SignalType};

use super::row::{ReadingRow, ReadingSource};

/// A typed input value for one signal.
#[derive(Debug, Clone, PartialEq)]
pub enum SignalValue {
    YesNo(bool),
    Time(NaiveTime),
    Amount(f64),
    Text(String),
    Absent,
}

impl SignalValue {
    /// Canonical string form stored in the `value` column.
    pub fn encode(&self) -> String {
        match self {
            SignalValue::YesNo(true) => "true".to_string(),
            SignalValue::YesNo(false) => "false".to_string(),
            SignalValue::Time(t) => t.format("%H:%M:%S").to_string(),
            SignalValue::Amount(n) => n.to_string(),
            SignalValue::Text(s) => s.clone(),
            SignalValue::Absent => String::new(),
        }
    }
}

/// A raw value string that does not fit its signal's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueParseError {
    #[error("expected yes/no or true/false, got '{0}'")]
    BadBool(String),
    #[error("expected HH:MM or HH:MM:SS, got '{0}'")]
    BadTime(String),
    #[error("expected a number, got '{0}'")]
    BadNumber(String),
}

/// Parses a raw string into the typed value for `signal_type`.
/// A blank string is an absent value for every type.
pub fn parse_value(signal_type: &SignalType, raw: &str) -> Result<SignalValue, ValueParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(SignalValue::Absent);
    }

    match signal_type {
        SignalType::Yesno => match raw.to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Ok(SignalValue::YesNo(true)),
            "no" | "n" | "false" | "0" => Ok(SignalValue::YesNo(false)),
            _ => Err(ValueParseError::BadBool(raw.to_string())),
        },
        SignalType::Time => NaiveTime::parse_from_str(raw, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
            .map(SignalValue::Time)
            .map_err(|_| ValueParseError::BadTime(raw.to_string())),
        SignalType::Quantity { .. } | SignalType::Hours { .. } | SignalType::Number { .. } => raw
            .parse::<f64>()
            .map(SignalValue::Amount)
            .map_err(|_| ValueParseError::BadNumber(raw.to_string())),
        SignalType::Text => Ok(SignalValue::Text(raw.to_string())),
    }
}

/// Builds one candidate row per active signal of each active group, in
/// document order, for the given date.
///
/// Each row carries the denormalized group/signal snapshots, the type tag,
/// the encoded value (empty when no value was supplied), the signal's unit
/// and source `ui`. `created_at` is left empty; the store fills it at
/// first insert.
pub fn build_rows(
    doc: &Document,
    date: NaiveDate,
    values: &HashMap<String, SignalValue>,
) -> Vec<ReadingRow> {
    let date_str = date.format("%Y-%m-%d").to_string();
    let mut rows = Vec::new();

    for group in doc.active_groups() {
        for signal in group.active_signals() {
            let value = values
                .get(&signal.id)
                .map(SignalValue::encode)
                .unwrap_or_default();

            rows.push(ReadingRow {
                date: date_str.clone(),
                group_id: group.id.clone(),
                group_name: group.name.clone(),
                signal_id: signal.id.clone(),
                signal_label: signal.label.clone(),
                kind: signal.signal_type.tag().to_string(),
                value,
                unit: signal.signal_type.unit().unwrap_or("").to_string(),
                source: ReadingSource::Ui.as_str().to_string(),
                created_at: String::new(),
            });
        }
    }

    rows
}
