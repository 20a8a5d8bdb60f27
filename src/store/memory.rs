//! In-memory settings store for tests and ephemeral runs.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::headers::SettingsDocument;
use crate::store::{SettingsStore, StoreError};

/// Mutex-guarded in-memory document map. Contents are lost on shutdown.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, SettingsDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<SettingsDocument>, StoreError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        Ok(documents.get(key).cloned())
    }

    fn save(&self, key: &str, document: &SettingsDocument) -> Result<(), StoreError> {
        let mut documents = self
            .documents
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))?;
        documents.insert(key.to_string(), document.clone());
        Ok(())
    }
}
