use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Reads a JSON document. Failures are logged and returned as
/// `ConfigUnavailable` naming the document and the cause; the caller
/// decides whether that is fatal.
pub fn load_json(path: &Path) -> Result<Value> {
    let document = path.display().to_string();

    let raw = fs::read_to_string(path).map_err(|e| {
        log::error!("Failed to read JSON file {document}: {e}");
        Error::config(document.as_str(), e)
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        log::error!("Failed to parse JSON file {document}: {e}");
        Error::config(document.as_str(), e)
    })
}
