//! Configuration persistence
//!
//! Load/save of the whole document, no partial writes. A missing file is
//! expected absence, not an error: the default document is created and
//! persisted on first load. Concurrent writers are out of scope (single
//! local user); the save is a plain whole-file overwrite.

use std::fs;
use std::path::Path;

use super::document::Document;
use super::errors::{ConfigError, ConfigResult};

/// Loads the configuration document at `path`.
///
/// If the file exists it is deserialized verbatim, with no schema
/// validation beyond well-formedness. If it does not exist, the default
/// document is persisted to `path` and returned, so a second load yields
/// the identical document.
pub fn load(path: &Path) -> ConfigResult<Document> {
    if path.exists() {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        return serde_json::from_str(&content).map_err(|e| ConfigError::Malformed {
            path: path.to_path_buf(),
            source: e,
        });
    }

    let doc = Document::default();
    save(path, &doc)?;
    Ok(doc)
}

/// Saves the full document to `path`, pretty-printed so the file diffs
/// cleanly under version control. Creates parent directories as needed.
pub fn save(path: &Path, doc: &Document) -> ConfigResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let serialized =
        serde_json::to_string_pretty(doc).map_err(|e| ConfigError::Encode { source: e })?;

    fs::write(path, serialized).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
