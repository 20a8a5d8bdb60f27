//! Settings persistence.
//!
//! # Design Decisions
//! - The store is injected into the editor as a trait object; there is no
//!   ambient global configuration access
//! - Documents are saved as a whole: a save either replaces the previous
//!   contents completely or leaves them untouched
//! - No locking across edit sessions; two racing saves are last-writer-wins

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use thiserror::Error;

use crate::headers::SettingsDocument;

/// Errors surfaced by a settings store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing storage failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing storage holds data that does not parse.
    #[error("stored settings are not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document could not be serialized for storage.
    #[error("settings could not be serialized: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The storage backend refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Named-document storage for settings.
///
/// An absent document is not an error: `load` returns `Ok(None)` and callers
/// substitute defaults. A failed `save` must leave the previously stored
/// document unchanged.
pub trait SettingsStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<SettingsDocument>, StoreError>;
    fn save(&self, key: &str, document: &SettingsDocument) -> Result<(), StoreError>;
}
