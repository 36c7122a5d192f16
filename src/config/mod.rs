//! Configuration subsystem for dailysignals
//!
//! The configuration document is the user's schema: signal groups, each
//! holding signal definitions. It is loaded wholesale on startup, mutated
//! in memory, and persisted wholesale on explicit save. Soft-deleted
//! entities stay in the document so historical readings keep resolving.

mod document;
mod errors;
pub mod store;

pub use document::{Document, Lifecycle, Signal, SignalGroup, SignalType, APP_NAME, CONFIG_VERSION};
pub use errors::{ConfigError, ConfigResult};
