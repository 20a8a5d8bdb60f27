//! The persisted settings document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::headers::name::{HeaderName, Section};

/// Storage key the settings document is persisted under.
pub const SETTINGS_KEY: &str = "http_response_headers.settings";

/// Persisted header configuration: two sections mapping canonical header
/// names to free-text values.
///
/// Keys are always drawn from [`HeaderName`]; the editor writes documents
/// built from the field table only. A key absent from its section reads as
/// the empty string. Unknown keys found in a hand-edited store file are
/// ignored on read and dropped on the next save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsDocument {
    pub security: BTreeMap<String, String>,
    pub performance: BTreeMap<String, String>,
}

impl SettingsDocument {
    fn section_map(&self, section: Section) -> &BTreeMap<String, String> {
        match section {
            Section::Security => &self.security,
            Section::Performance => &self.performance,
        }
    }

    /// Stored value for a header, or `""` when absent.
    pub fn value_of(&self, name: HeaderName) -> &str {
        self.section_map(name.section())
            .get(name.as_str())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set a header value in its section (empty values are stored, not removed).
    pub fn set(&mut self, name: HeaderName, value: String) {
        let map = match name.section() {
            Section::Security => &mut self.security,
            Section::Performance => &mut self.performance,
        };
        map.insert(name.as_str().to_string(), value);
    }

    /// Configured headers with a non-empty value, in display order.
    pub fn non_empty(&self) -> impl Iterator<Item = (HeaderName, &str)> + '_ {
        HeaderName::ALL.into_iter().filter_map(|name| {
            let value = self.value_of(name);
            (!value.is_empty()).then_some((name, value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_keys_read_as_empty_string() {
        let doc = SettingsDocument::default();
        for name in HeaderName::ALL {
            assert_eq!(doc.value_of(name), "");
        }
    }

    #[test]
    fn test_set_routes_to_the_right_section() {
        let mut doc = SettingsDocument::default();
        doc.set(HeaderName::XFrameOptions, "DENY".to_string());
        doc.set(HeaderName::CacheControl, "max-age=900, public".to_string());

        assert_eq!(doc.security.get("X-Frame-Options").unwrap(), "DENY");
        assert!(doc.security.get("Cache-Control").is_none());
        assert_eq!(doc.performance.get("Cache-Control").unwrap(), "max-age=900, public");
    }

    #[test]
    fn test_values_round_trip_exactly() {
        // Values with semicolons, quotes and surrounding whitespace must
        // come back byte-for-byte.
        let tricky = "  default-src 'self'; script-src \"trusted.example\" ";
        let mut doc = SettingsDocument::default();
        doc.set(HeaderName::ContentSecurityPolicy, tricky.to_string());
        assert_eq!(doc.value_of(HeaderName::ContentSecurityPolicy), tricky);

        let toml = toml::to_string(&doc).unwrap();
        let back: SettingsDocument = toml::from_str(&toml).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_non_empty_skips_cleared_values() {
        let mut doc = SettingsDocument::default();
        doc.set(HeaderName::XFrameOptions, "SAMEORIGIN".to_string());
        doc.set(HeaderName::XContentTypeOptions, String::new());

        let configured: Vec<_> = doc.non_empty().collect();
        assert_eq!(configured, vec![(HeaderName::XFrameOptions, "SAMEORIGIN")]);
    }
}
