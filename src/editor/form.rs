//! Serializable description of the settings form.

use serde::{Deserialize, Serialize};

use crate::headers::{HeaderName, Section, WidgetKind};

/// One editable field on the settings form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Canonical header name; doubles as the submit key.
    pub name: HeaderName,
    /// Display label (the canonical header name).
    pub label: String,
    /// Currently stored value, `""` when nothing is stored.
    pub value: String,
    /// Example value shown as a UI hint.
    pub placeholder: String,
    pub description: String,
    pub widget: WidgetKind,
}

/// A titled group of fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSection {
    pub section: Section,
    pub title: String,
    pub fields: Vec<FormField>,
}

/// The complete settings form: two sections, seven fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSpec {
    pub id: String,
    pub sections: Vec<FormSection>,
}

impl FormSpec {
    /// Form identifier.
    pub const ID: &'static str = "http_response_headers_settings_form";

    /// Find a field by header name, across sections.
    pub fn field(&self, name: HeaderName) -> Option<&FormField> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }
}
