use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::Level;

use super::{StorageError, ThemeStorage};
use crate::storage_log;

/// File name used under the per-user config directory.
const STORAGE_FILE: &str = "storage.json";

/// Storage persisted as a JSON object of string entries in a single file.
///
/// A missing file reads as empty storage; the file and its parent directory
/// are created on the first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at `<config dir>/dashtheme/storage.json`.
    pub fn default_location() -> Result<Self, StorageError> {
        let config_dir = dirs::config_dir().ok_or(StorageError::NoConfigDir)?;
        Ok(Self::new(config_dir.join("dashtheme").join(STORAGE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, contents).map_err(|e| self.io_error(e))
    }

    fn entries_or_empty(&self) -> BTreeMap<String, String> {
        self.read_entries().unwrap_or_else(|e| {
            storage_log!(Level::Warn, "ignoring unreadable storage file: {}", e);
            BTreeMap::new()
        })
    }
}

impl ThemeStorage for FileStorage {
    fn keys(&self) -> Vec<String> {
        self.entries_or_empty().into_keys().collect()
    }

    fn get_item(&self, key: &str) -> Option<String> {
        self.entries_or_empty().remove(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        // A corrupt file is overwritten rather than blocking every later write.
        let mut entries = self.entries_or_empty();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}
