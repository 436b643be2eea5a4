//! Gateway trait and implementations
//!
//! Provides a trait for note persistence, with:
//! - Postgres implementation (`NoteRepo`)
//! - In-process implementation for testing (`MemoryNoteStore`)

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use super::repos::{Note, StorageError};
use crate::models::NoteFields;

/// The five gateway operations (testable).
///
/// Absence is reported as `None` / `false`. `StorageError` means the
/// store itself failed.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a note and return the stored row, id included.
    async fn create(&self, fields: &NoteFields) -> Result<Note, StorageError>;

    /// Every note, ascending by id.
    async fn read_all(&self) -> Result<Vec<Note>, StorageError>;

    async fn read_one(&self, id: i32) -> Result<Option<Note>, StorageError>;

    /// Overwrite title, text and datetime together.
    async fn update(&self, id: i32, fields: &NoteFields) -> Result<Option<Note>, StorageError>;

    /// Whether a row was actually removed.
    async fn delete(&self, id: i32) -> Result<bool, StorageError>;

    /// Round-trip to the backing store. Stores with nothing to reach
    /// are always up.
    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

/// In-process note store for testing
///
/// Mirrors the Postgres semantics: ids increase monotonically and are
/// never reused.
#[derive(Debug, Default)]
pub struct MemoryNoteStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    last_id: i32,
    notes: BTreeMap<i32, Note>,
}

impl MemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored notes
    pub fn len(&self) -> usize {
        self.lock().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn create(&self, fields: &NoteFields) -> Result<Note, StorageError> {
        let mut inner = self.lock();
        inner.last_id += 1;
        let note = Note {
            id: inner.last_id,
            title: fields.title().to_owned(),
            text: fields.text().to_owned(),
            datetime: fields.datetime().to_owned(),
        };
        inner.notes.insert(note.id, note.clone());
        Ok(note)
    }

    async fn read_all(&self) -> Result<Vec<Note>, StorageError> {
        Ok(self.lock().notes.values().cloned().collect())
    }

    async fn read_one(&self, id: i32) -> Result<Option<Note>, StorageError> {
        Ok(self.lock().notes.get(&id).cloned())
    }

    async fn update(&self, id: i32, fields: &NoteFields) -> Result<Option<Note>, StorageError> {
        let mut inner = self.lock();
        Ok(inner.notes.get_mut(&id).map(|note| {
            note.title = fields.title().to_owned();
            note.text = fields.text().to_owned();
            note.datetime = fields.datetime().to_owned();
            note.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<bool, StorageError> {
        Ok(self.lock().notes.remove(&id).is_some())
    }
}
