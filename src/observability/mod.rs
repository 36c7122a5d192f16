//! Observability for dailysignals
//!
//! Structured JSON logging, synchronous and deterministic:
//! one log line = one event, fields in deterministic order, no buffering
//! and no background threads. Logging failure never fails an operation.

mod logger;

pub use logger::{Logger, Severity};
