//! JSON file-based key-value storage.
//!
//! All entries live in a single human-readable JSON document. Writes use the
//! write-to-temp + rename pattern so the file is never left half-written.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(log n), the whole document is loaded into memory once
//! - **Write**: O(n), the whole document is serialized on every change
//! - **Best for**: a handful of small entries written on user interaction

use crate::domain::error::{ExplorerError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name used inside the data directory.
pub const STATE_FILE_NAME: &str = "state.json";

/// Suffix appended to a state file that could not be parsed.
pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// On-disk document format.
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "session": "{\"searchQuery\":\"\",\"selectedLanguages\":[],...}"
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Format version for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// The document is cached in memory and rewritten on each modification.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; owned by the single writer that holds the
/// application store.
pub struct JsonFileStore {
    file_path: PathBuf,
    data: StorageData,
    /// Set when the in-memory document differs from disk.
    dirty: bool,
}

impl JsonFileStore {
    /// Creates or opens a store at `file_path`.
    ///
    /// Parent directories are created automatically. A missing file starts an
    /// empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// cannot be read. A file that is not a valid document is renamed with
    /// [`CORRUPT_SUFFIX`] and the store starts empty.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use country_explorer::storage::{JsonFileStore, KeyValueStore};
    /// use std::path::PathBuf;
    ///
    /// let mut store = JsonFileStore::new(PathBuf::from("/tmp/country-explorer/state.json"))?;
    /// store.set("session", "{}")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path).or_else(|e| match e {
                ExplorerError::Storage(_) => Self::quarantine(&file_path, &e),
                other => Err(other),
            })?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Opens the store in its default location inside `data_dir`.
    ///
    /// # Errors
    ///
    /// See [`JsonFileStore::new`].
    pub fn in_dir(data_dir: &Path) -> Result<Self> {
        Self::new(data_dir.join(STATE_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| ExplorerError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded store data"
        );

        Ok(data)
    }

    /// Moves an unreadable document aside so the store can start empty.
    fn quarantine(path: &Path, err: &ExplorerError) -> Result<StorageData> {
        let mut aside = path.as_os_str().to_os_string();
        aside.push(CORRUPT_SUFFIX);
        tracing::warn!(path = ?path, error = %err, "state file is corrupt, starting empty");
        std::fs::rename(path, PathBuf::from(aside))?;
        Ok(StorageData::default())
    }

    /// Writes the document if it changed, via a temporary file and rename.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| ExplorerError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key, len = value.len()).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }

        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove", key = %key).entered();

        if self.data.entries.remove(key).is_some() {
            self.dirty = true;
            self.save_to_file()?;
        }
        Ok(())
    }
}

impl Drop for JsonFileStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
