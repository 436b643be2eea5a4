//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Acquires one connection per call, released on every exit path
//! - Issues exactly one parameterized statement per call
//! - Uses RETURNING instead of a follow-up SELECT

pub mod notes;

pub use notes::{Note, NoteRepo, StorageError};
