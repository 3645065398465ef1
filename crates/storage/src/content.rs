//! Loading the question catalog from JSON.
//!
//! The file is a list of categories, each carrying its questions:
//!
//! ```json
//! [{ "id": "fiqh", "name": "Fiqh", "color": "#10b981",
//!    "questions": [{ "prompt": "...", "answer": "..." }] }]
//! ```

use std::path::Path;

use quiz_core::model::{Catalog, CategoryEntry};

use crate::repository::StorageError;

/// Parse a catalog from a JSON string.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON, blank fields or
/// duplicate category ids.
pub fn parse_catalog(json: &str) -> Result<Catalog, StorageError> {
    let entries: Vec<CategoryEntry> =
        serde_json::from_str(json).map_err(|err| StorageError::Serialization(err.to_string()))?;
    Catalog::from_entries(entries).map_err(|err| StorageError::Serialization(err.to_string()))
}

/// Read and parse a catalog file.
///
/// # Errors
///
/// Returns `StorageError::NotFound` if the file does not exist,
/// `StorageError::Connection` for other I/O failures, and
/// `StorageError::Serialization` if the contents are invalid.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, StorageError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => StorageError::NotFound,
        _ => StorageError::Connection(format!("{}: {err}", path.display())),
    })?;
    let catalog = parse_catalog(&raw)?;
    log::info!(
        "loaded {} categories from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}
