//! Session-local projection of the backend's time entries.
//!
//! The store never changes an entry on its own. It is replaced wholesale by
//! each reload and is exactly as fresh as the newest snapshot applied.
//!
//! ## Snapshot ordering
//!
//! Reloads may overlap, and their responses can arrive out of order. Every
//! snapshot carries the generation taken before its fetch started, and
//! [`EntryStore::apply_snapshot`] ignores any snapshot that is not newer than
//! the one already held.

use super::entry::{EntryId, EntryStatus, TimeEntry};
use super::messages::Message;
use chrono::{DateTime, Local};
use std::collections::HashMap;

/// Time entries as last fetched from the backend, in backend order.
#[derive(Debug, Default)]
pub struct EntryStore {
    entries: Vec<TimeEntry>,
    loaded_at: Option<DateTime<Local>>,
    generation: u64,
}

impl EntryStore {
    /// Creates an empty store that has not been loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the held entries with a freshly fetched collection.
    ///
    /// Backend order is kept. When an id occurs more than once the later
    /// record wins and takes the position of the first occurrence.
    pub fn replace(&mut self, fetched: Vec<TimeEntry>) {
        let mut positions: HashMap<EntryId, usize> = HashMap::with_capacity(fetched.len());
        let mut entries: Vec<TimeEntry> = Vec::with_capacity(fetched.len());

        for entry in fetched {
            match positions.get(&entry.id) {
                Some(&index) => {
                    tracing::warn!("{}", Message::DuplicateEntryId(entry.id.to_string()));
                    entries[index] = entry;
                }
                None => {
                    positions.insert(entry.id.clone(), entries.len());
                    entries.push(entry);
                }
            }
        }

        self.entries = entries;
        self.loaded_at = Some(Local::now());
    }

    /// Replaces the held entries only when `generation` is newer than the
    /// snapshot currently held.
    ///
    /// Returns `false` when the snapshot was stale and has been dropped.
    pub fn apply_snapshot(&mut self, generation: u64, fetched: Vec<TimeEntry>) -> bool {
        if self.is_loaded() && generation <= self.generation {
            return false;
        }
        self.generation = generation;
        self.replace(fetched);
        true
    }

    /// Generation of the snapshot currently held, `0` before the first one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether any snapshot has been applied yet, even an empty one.
    pub fn is_loaded(&self) -> bool {
        self.loaded_at.is_some()
    }

    /// Local time of the last applied snapshot.
    pub fn loaded_at(&self) -> Option<DateTime<Local>> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All held entries, in backend order.
    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    pub fn get(&self, id: &EntryId) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Last known status of `id`, `None` when the id is unknown.
    pub fn status_of(&self, id: &EntryId) -> Option<EntryStatus> {
        self.get(id).map(|entry| entry.status)
    }

    /// Entries still awaiting a decision, in backend order.
    pub fn list_pending(&self) -> Vec<TimeEntry> {
        self.entries.iter().filter(|entry| entry.is_pending()).cloned().collect()
    }
}
