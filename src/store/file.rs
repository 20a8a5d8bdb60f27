//! TOML-file settings store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::headers::SettingsDocument;
use crate::store::{SettingsStore, StoreError};

/// On-disk shape: every named document lives under a `[documents."<key>"]`
/// table in one TOML file.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct StoreFile {
    documents: BTreeMap<String, SettingsDocument>,
}

/// Settings store backed by a single TOML file.
///
/// Saves serialize the full file to a sibling temp file and rename it into
/// place, so a failure at any point leaves the previous contents intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes writers; readers go straight to disk.
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<StoreFile, StoreError> {
        if !self.path.exists() {
            return Ok(StoreFile::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl SettingsStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<SettingsDocument>, StoreError> {
        Ok(self.read_file()?.documents.get(key).cloned())
    }

    fn save(&self, key: &str, document: &SettingsDocument) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;

        let mut file = self.read_file()?;
        file.documents.insert(key.to_string(), document.clone());
        let serialized = toml::to_string_pretty(&file)?;

        let tmp_path = self.path.with_extension("toml.tmp");
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp_path, serialized)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
