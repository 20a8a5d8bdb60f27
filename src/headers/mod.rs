//! Header domain: the fixed set of configurable response headers.
//!
//! # Data Flow
//! ```text
//! FieldDescriptor table (static)
//!     → editor builds the settings form from it
//!     → administrator submits values
//!     → SettingsDocument (security/performance sections)
//!     → persisted under SETTINGS_KEY
//!     → response middleware sets non-empty values on outgoing responses
//! ```
//!
//! # Design Decisions
//! - The header set is a closed enumeration; there is no way to configure
//!   a header outside the seven known names
//! - Field metadata (widget, placeholder, description) lives in one
//!   declarative table so the form and the persistence logic cannot drift
//! - Absent keys always read as the empty string, never as null

pub mod document;
pub mod fields;
pub mod name;

pub use document::{SettingsDocument, SETTINGS_KEY};
pub use fields::{descriptor, FieldDescriptor, WidgetKind, FIELDS};
pub use name::{HeaderName, Section, UnknownHeader};
