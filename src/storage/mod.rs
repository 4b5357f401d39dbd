//! # Theme Store
//!
//! Persistence of the dashboard's theme preference in a key/value store,
//! the way a browser keeps it in `localStorage`. The entry is found by a key
//! containing [`THEME_STORE_MARKER`] and holds either `{"data": "<mode>"}` or
//! the bare mode.
//!
//! Reading never fails from the caller's point of view: anything missing or
//! malformed is logged and treated as "no theme available".

mod file;
mod memory;


use log::Level;
use serde_json::{json, Value};
use std::io;
use std::path::PathBuf;

use crate::storage_log;
use crate::types::ThemeMode;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Substring identifying the theme entry among all storage keys.
pub const THEME_STORE_MARKER: &str = "theme-store";
/// Key written when no theme entry exists yet.
pub const DEFAULT_THEME_STORE_KEY: &str = "theme-store";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid storage contents: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot determine config directory")]
    NoConfigDir,
}

/// A string key/value store.
pub trait ThemeStorage {
    /// All keys currently stored, in a stable order.
    fn keys(&self) -> Vec<String>;

    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// First key containing [`THEME_STORE_MARKER`].
pub fn find_theme_store_key(storage: &dyn ThemeStorage) -> Option<String> {
    storage
        .keys()
        .into_iter()
        .find(|key| key.contains(THEME_STORE_MARKER))
}

/// The persisted theme, or `None` when there is no usable entry.
pub fn load_persisted_theme(storage: &dyn ThemeStorage) -> Option<ThemeMode> {
    match read_theme_store(storage) {
        Ok(Some(mode)) => {
            storage_log!(Level::Debug, "persisted theme found: {}", mode);
            Some(mode)
        }
        Ok(None) => None,
        Err(e) => {
            storage_log!(Level::Warn, "failed to read persisted theme: {}", e);
            None
        }
    }
}

/// The persisted theme, falling back to dark.
pub fn restore_theme(storage: &dyn ThemeStorage) -> ThemeMode {
    load_persisted_theme(storage).unwrap_or_default()
}

/// Store `mode` under the existing theme entry, or under
/// [`DEFAULT_THEME_STORE_KEY`] if there is none.
pub fn persist_theme(storage: &mut dyn ThemeStorage, mode: ThemeMode) -> Result<(), StorageError> {
    let key = find_theme_store_key(storage).unwrap_or_else(|| DEFAULT_THEME_STORE_KEY.to_string());
    let value = json!({ "data": mode }).to_string();
    storage.set_item(&key, &value)?;
    storage_log!(Level::Info, "theme '{}' persisted under '{}'", mode, key);
    Ok(())
}

/// The mode the theme toggle switches to. A missing current mode counts as
/// dark.
pub fn toggle_theme(current: Option<ThemeMode>) -> ThemeMode {
    current.unwrap_or_default().toggled()
}

fn read_theme_store(storage: &dyn ThemeStorage) -> Result<Option<ThemeMode>, StorageError> {
    let Some(key) = find_theme_store_key(storage) else {
        storage_log!(Level::Debug, "no {} entry in storage", THEME_STORE_MARKER);
        return Ok(None);
    };
    let Some(raw) = storage.get_item(&key).filter(|raw| !raw.trim().is_empty()) else {
        return Ok(None);
    };

    let parsed: Value = match serde_json::from_str(&raw) {
        Ok(parsed) => parsed,
        // Bare, unquoted mode strings are accepted as well.
        Err(e) => return raw.trim().parse::<ThemeMode>().map(Some).map_err(|_| e.into()),
    };

    let theme = parsed.get("data").unwrap_or(&parsed);
    Ok(ThemeMode::from_value(theme))
}
