//! Single-file JSON document backend.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::backend::{BackendResult, StorageBackend};

/// Stores the serialized collection as one JSON document on disk.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    /// Uses `path` as the document location; the file may not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonFileBackend {
    fn read(&self) -> BackendResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, payload: &str) -> BackendResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }
}
