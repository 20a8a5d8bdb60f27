//! Load/submit logic for the header settings form.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

use crate::cache::CacheFlush;
use crate::editor::form::{FormField, FormSection, FormSpec};
use crate::headers::{HeaderName, Section, SettingsDocument, FIELDS, SETTINGS_KEY};
use crate::observability::metrics;
use crate::store::{SettingsStore, StoreError};

/// A submit that could not be persisted.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The underlying store rejected or failed the save. The previously
    /// stored document is unchanged.
    #[error("the settings were not saved: {0}")]
    Persistence(#[from] StoreError),
}

/// Presents current header values for editing and persists changes.
pub struct HeaderSettingsEditor {
    store: Arc<dyn SettingsStore>,
    cache: Arc<dyn CacheFlush>,
}

impl HeaderSettingsEditor {
    pub fn new(store: Arc<dyn SettingsStore>, cache: Arc<dyn CacheFlush>) -> Self {
        Self { store, cache }
    }

    /// Build the settings form from the stored document.
    ///
    /// An absent document is not an error: every field simply shows the
    /// empty string. Pure read, no side effects.
    pub fn load_view(&self) -> Result<FormSpec, StoreError> {
        let document = self.store.load(SETTINGS_KEY)?.unwrap_or_default();
        metrics::record_load();

        let sections = Section::ALL
            .into_iter()
            .map(|section| FormSection {
                section,
                title: section.title().to_string(),
                fields: FIELDS
                    .iter()
                    .filter(|f| f.name.section() == section)
                    .map(|f| FormField {
                        name: f.name,
                        label: f.name.as_str().to_string(),
                        value: document.value_of(f.name).to_string(),
                        placeholder: f.placeholder.to_string(),
                        description: f.description.to_string(),
                        widget: f.widget,
                    })
                    .collect(),
            })
            .collect();

        Ok(FormSpec {
            id: FormSpec::ID.to_string(),
            sections,
        })
    }

    /// Persist submitted field values and signal a cache flush.
    ///
    /// Both sections are rebuilt in full from the field table: a header
    /// missing from `values` is written as the empty string, so the save is
    /// always a complete overwrite and never a partial merge. On success the
    /// host cache is flushed exactly once; on failure nothing is flushed and
    /// the stored document is unchanged.
    pub fn submit(
        &self,
        values: &HashMap<HeaderName, String>,
    ) -> Result<SettingsDocument, SubmitError> {
        let mut document = SettingsDocument::default();
        for field in &FIELDS {
            let value = values.get(&field.name).cloned().unwrap_or_default();
            document.set(field.name, value);
        }

        if let Err(e) = self.store.save(SETTINGS_KEY, &document) {
            metrics::record_save("failure");
            return Err(e.into());
        }
        metrics::record_save("success");

        tracing::info!(
            configured = document.non_empty().count(),
            "Header settings saved"
        );
        self.cache.flush_all();

        Ok(document)
    }
}
