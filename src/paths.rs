//! Data directory layout.
//!
//! Both persisted artifacts live side by side in one data directory:
//! the configuration document and the readings workbook.

use std::path::{Path, PathBuf};

/// File name of the configuration document.
pub const CONFIG_FILE: &str = "config.json";

/// File name of the readings workbook.
pub const READINGS_FILE: &str = "dailysignals.json";

/// Path of the configuration document inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Path of the readings workbook inside `data_dir`.
pub fn readings_path(data_dir: &Path) -> PathBuf {
    data_dir.join(READINGS_FILE)
}
