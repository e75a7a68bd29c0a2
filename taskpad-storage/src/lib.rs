//! Taskpad Storage - Note Store Trait and In-Memory Implementation
//!
//! Defines the storage abstraction for the note collection. The Postgres
//! implementation lives in taskpad-api next to the connection pool; the
//! in-memory store here backs tests and offline use.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use taskpad_core::{new_note_id, NewNote, Note, NoteId, StoreError, StoreResult};

// ============================================================================
// STORE TRAIT
// ============================================================================

/// Store abstraction over the single note collection.
///
/// The store assigns identifiers; callers stamp timestamps before insert.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a new note and return its store-assigned identifier.
    async fn note_insert(&self, note: NewNote) -> StoreResult<NoteId>;

    /// Delete a note by ID. Returns the number of notes removed
    /// (0 when the ID is absent, 1 when it was present).
    async fn note_delete(&self, id: NoteId) -> StoreResult<u64>;

    /// List the entire collection, oldest first.
    async fn note_list_all(&self) -> StoreResult<Vec<Note>>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// In-memory note store backed by a `HashMap`.
///
/// Cloning shares the underlying map, so a clone handed to a router
/// observes the same collection as the original.
#[derive(Debug, Clone, Default)]
pub struct MemoryNoteStore {
    notes: Arc<RwLock<HashMap<NoteId, Note>>>,
}

impl MemoryNoteStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored notes.
    pub fn clear(&self) -> StoreResult<()> {
        self.notes
            .write()
            .map_err(|_| StoreError::LockPoisoned)?
            .clear();
        Ok(())
    }

    /// Count of stored notes.
    pub fn note_count(&self) -> StoreResult<usize> {
        Ok(self.notes.read().map_err(|_| StoreError::LockPoisoned)?.len())
    }
}

#[async_trait]
impl NoteStore for MemoryNoteStore {
    async fn note_insert(&self, note: NewNote) -> StoreResult<NoteId> {
        let mut notes = self.notes.write().map_err(|_| StoreError::LockPoisoned)?;
        let id = new_note_id();
        notes.insert(id, note.into_note(id));
        Ok(id)
    }

    async fn note_delete(&self, id: NoteId) -> StoreResult<u64> {
        let mut notes = self.notes.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(if notes.remove(&id).is_some() { 1 } else { 0 })
    }

    async fn note_list_all(&self) -> StoreResult<Vec<Note>> {
        let notes = self.notes.read().map_err(|_| StoreError::LockPoisoned)?;
        let mut all: Vec<Note> = notes.values().cloned().collect();
        // UUIDv7 keys sort by creation time
        all.sort_by_key(|n| n.note_id);
        Ok(all)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taskpad_core::{Priority, Status};

    fn make_test_note(title: &str) -> NewNote {
        let now = Utc::now();
        NewNote {
            title: title.to_string(),
            description: "test description".to_string(),
            due_date: "2025-06-01".to_string(),
            priority: Priority::Medium,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_stores() {
        let store = MemoryNoteStore::new();
        let id = store.note_insert(make_test_note("a")).await.unwrap();
        assert_eq!(id.get_version_num(), 7);
        assert_eq!(store.note_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_returns_inserted_notes_oldest_first() {
        let store = MemoryNoteStore::new();
        let id1 = store.note_insert(make_test_note("first")).await.unwrap();
        let id2 = store.note_insert(make_test_note("second")).await.unwrap();
        let all = store.note_list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].note_id, id1);
        assert_eq!(all[1].note_id, id2);
    }

    #[tokio::test]
    async fn test_delete_present_returns_one() {
        let store = MemoryNoteStore::new();
        let id = store.note_insert(make_test_note("a")).await.unwrap();
        let count = store.note_delete(id).await.unwrap();
        assert_eq!(count, 1);
        assert_eq!(store.note_count().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_absent_returns_zero() {
        let store = MemoryNoteStore::new();
        store.note_insert(make_test_note("a")).await.unwrap();
        let count = store.note_delete(new_note_id()).await.unwrap();
        assert_eq!(count, 0);
        assert_eq!(store.note_count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_the_collection() {
        let store = MemoryNoteStore::new();
        let clone = store.clone();
        store.note_insert(make_test_note("shared")).await.unwrap();
        let all = clone.note_list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "shared");
    }

    #[tokio::test]
    async fn test_clear_empties_the_store() {
        let store = MemoryNoteStore::new();
        store.note_insert(make_test_note("a")).await.unwrap();
        store.clear().unwrap();
        assert!(store.note_list_all().await.unwrap().is_empty());
    }
}
