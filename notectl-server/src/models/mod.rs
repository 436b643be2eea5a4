//! Domain models with validation at construction
//!
//! All user input is sanitized, then validated, before it can become
//! `NoteFields`. Invalid input returns `ValidationErrors`, not panic.

pub mod datetime;
pub mod note;
pub mod sanitize;
pub mod validation;

pub use datetime::is_iso8601;
pub use note::{NoteFields, NoteInput, MAX_TITLE_LEN};
pub use sanitize::sanitize;
pub use validation::{ValidationError, ValidationErrors};
