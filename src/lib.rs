//! dailysignals - a local-first daily metric tracker
//!
//! The user defines a schema of tracked signals (grouped metrics) and records
//! one value per signal per calendar day. Two artifacts are persisted,
//! independently of each other: the configuration document (the schema) and
//! the readings workbook (the recorded values).

pub mod cli;
pub mod config;
pub mod observability;
pub mod paths;
pub mod readings;
