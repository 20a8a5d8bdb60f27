//! Canonical header names and the sections they are stored under.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Top-level grouping a header value is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Security,
    Performance,
}

impl Section {
    /// Key the section is persisted under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Security => "security",
            Section::Performance => "performance",
        }
    }

    /// Human-readable title shown on the settings form.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Security => "Security",
            Section::Performance => "Performance",
        }
    }

    /// Both sections, in form display order.
    pub const ALL: [Section; 2] = [Section::Security, Section::Performance];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The fixed set of configurable response headers.
///
/// Serializes to the canonical wire name (e.g. `Content-Security-Policy`),
/// which is also the key used in API payloads and persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeaderName {
    #[serde(rename = "Content-Security-Policy")]
    ContentSecurityPolicy,
    #[serde(rename = "Strict-Transport-Security")]
    StrictTransportSecurity,
    #[serde(rename = "Public-Key-Pins")]
    PublicKeyPins,
    #[serde(rename = "X-Xss-Protection")]
    XXssProtection,
    #[serde(rename = "X-Frame-Options")]
    XFrameOptions,
    #[serde(rename = "X-Content-Type-Options")]
    XContentTypeOptions,
    #[serde(rename = "Cache-Control")]
    CacheControl,
}

impl HeaderName {
    /// All configurable headers, in form display order.
    pub const ALL: [HeaderName; 7] = [
        HeaderName::ContentSecurityPolicy,
        HeaderName::StrictTransportSecurity,
        HeaderName::PublicKeyPins,
        HeaderName::XXssProtection,
        HeaderName::XFrameOptions,
        HeaderName::XContentTypeOptions,
        HeaderName::CacheControl,
    ];

    /// Canonical wire name, also used as form label and storage key.
    pub fn as_str(&self) -> &'static str {
        match self {
            HeaderName::ContentSecurityPolicy => "Content-Security-Policy",
            HeaderName::StrictTransportSecurity => "Strict-Transport-Security",
            HeaderName::PublicKeyPins => "Public-Key-Pins",
            HeaderName::XXssProtection => "X-Xss-Protection",
            HeaderName::XFrameOptions => "X-Frame-Options",
            HeaderName::XContentTypeOptions => "X-Content-Type-Options",
            HeaderName::CacheControl => "Cache-Control",
        }
    }

    /// Section the header is stored under.
    pub fn section(&self) -> Section {
        match self {
            HeaderName::CacheControl => Section::Performance,
            _ => Section::Security,
        }
    }

    /// Headers belonging to the given section, in display order.
    pub fn in_section(section: Section) -> impl Iterator<Item = HeaderName> {
        Self::ALL.into_iter().filter(move |h| h.section() == section)
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderName {
    type Err = UnknownHeader;

    /// Parses a canonical header name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownHeader(s.to_string()))
    }
}

/// A header name outside the fixed configurable set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown header name: {0}")]
pub struct UnknownHeader(pub String);
