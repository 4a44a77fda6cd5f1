use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;

/// One file to transfer, relative to the configured roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestEntry {
    pub path: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
}

impl ManifestEntry {
    pub fn new(path: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            file_name: file_name.into(),
        }
    }
}

/// Ordered list of files. Document order is transfer order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Manifest {
    files: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(files: Vec<ManifestEntry>) -> Self {
        Self { files }
    }

    pub fn from_value(value: Value, document: &str) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::config(document, e))
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
