//! Declarative field table for the settings form.
//!
//! One row per configurable header. The form builder and the submit path
//! both iterate this table, so adding or removing a header is a one-line
//! change here and nowhere else.

use serde::{Deserialize, Serialize};

use crate::headers::name::HeaderName;

/// Input widget used for a field on the settings form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    /// Single-line text input.
    TextField,
    /// Multi-line text area (policies tend to span several directives).
    TextArea,
}

/// Static metadata for one form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub name: HeaderName,
    pub widget: WidgetKind,
    /// Example value shown as a UI hint; empty when no sensible example exists.
    pub placeholder: &'static str,
    pub description: &'static str,
}

/// All form fields, in display order: the six security headers first, then
/// the performance section.
pub const FIELDS: [FieldDescriptor; 7] = [
    FieldDescriptor {
        name: HeaderName::ContentSecurityPolicy,
        widget: WidgetKind::TextArea,
        placeholder: "default-src 'self';",
        description: "Defines a whitelist of approved sources of content for \
                      the site. Restricting the assets a browser can load adds \
                      an extra level of protection from XSS attacks.",
    },
    FieldDescriptor {
        name: HeaderName::StrictTransportSecurity,
        widget: WidgetKind::TextField,
        placeholder: "max-age=31536000; includeSubDomains",
        description: "Enforces TLS on the site and all subdomains for the \
                      configured period.",
    },
    FieldDescriptor {
        name: HeaderName::PublicKeyPins,
        widget: WidgetKind::TextField,
        placeholder: "",
        description: "HTTP Public Key Pinning (HPKP) tells a web client to \
                      associate a specific cryptographic public key with this \
                      server, to prevent MITM attacks with forged certificates.",
    },
    FieldDescriptor {
        name: HeaderName::XXssProtection,
        widget: WidgetKind::TextField,
        placeholder: "1; mode=block",
        description: "Configures the reflective XSS protection built into some \
                      user agents (Internet Explorer, Chrome and WebKit).",
    },
    FieldDescriptor {
        name: HeaderName::XFrameOptions,
        widget: WidgetKind::TextField,
        placeholder: "SAMEORIGIN",
        description: "Clickjacking protection. DENY means the site can't be \
                      framed, SAMEORIGIN allows framing by the site itself, \
                      ALLOW-FROM names sites permitted to frame this one.",
    },
    FieldDescriptor {
        name: HeaderName::XContentTypeOptions,
        widget: WidgetKind::TextField,
        placeholder: "nosniff",
        description: "Prevents browsers from mime-sniffing the content type of \
                      a response away from the one declared by the server.",
    },
    FieldDescriptor {
        name: HeaderName::CacheControl,
        widget: WidgetKind::TextField,
        placeholder: "max-age=900, public",
        description: "Effectively switches on caching in the browser. With a \
                      caching value set, the browser keeps the response for as \
                      long as specified; without it the response is \
                      re-requested every time.",
    },
];

/// Look up the descriptor for a header name.
pub fn descriptor(name: HeaderName) -> &'static FieldDescriptor {
    // The table is total over the enumeration, so the lookup cannot miss.
    FIELDS
        .iter()
        .find(|f| f.name == name)
        .expect("field table covers every header name")
}
