//! The header settings editor.
//!
//! # Data Flow
//! ```text
//! load_view:
//!     store.load(SETTINGS_KEY)  (absent → all-empty sections)
//!         → FormSpec built from the static field table
//!
//! submit:
//!     field values (missing field → empty string)
//!         → full SettingsDocument (both sections rebuilt, never merged)
//!         → store.save(SETTINGS_KEY)  (atomic overwrite)
//!         → cache.flush_all()  (exactly once, only on success)
//! ```
//!
//! # Design Decisions
//! - No validation beyond accepting arbitrary text, including empty values
//! - Submit always writes all seven keys; a cleared field persists as the
//!   empty string rather than being removed
//! - A failed save leaves the stored document untouched and surfaces the
//!   error; there are no retries

pub mod form;
pub mod settings_form;

pub use form::{FormField, FormSection, FormSpec};
pub use settings_form::{HeaderSettingsEditor, SubmitError};
