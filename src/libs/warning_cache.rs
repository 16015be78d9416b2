//! Durable cache of the last computed overtime warnings.
//!
//! The cache keeps a single JSON array of [`OvertimeWarning`] objects under
//! [`WARNINGS_KEY`] in a [`KeyValueStore`]. Every successful run replaces
//! the stored set as a whole.
//!
//! ## Lifecycle
//!
//! - [`WarningCache::save`] overwrites the stored value.
//! - [`WarningCache::load`] returns the stored set, or an empty one when the
//!   key is absent, the store fails, or the value cannot be decoded.
//! - [`WarningCache::refresh`] fetches work times, aggregates, detects,
//!   saves and returns the new set. A failing save is logged and the
//!   computed warnings are still returned.
//!
//! Concurrent refreshes against the same store are not coordinated: the
//! save that finishes last wins.
//!
//! ```rust
//! use liftlog::libs::warning_cache::{MemoryStore, WarningCache};
//!
//! let cache = WarningCache::new(MemoryStore::new());
//! assert!(cache.load().is_empty());
//! ```

use super::error::Result;
use super::messages::Message;
use super::overtime::{detect_from, OvertimeWarning};
use crate::api::Backend;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Key under which the warning set is stored.
pub const WARNINGS_KEY: &str = "overtimeWarnings";

/// Minimal persistent key/value contract backing the warning cache.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// In-process store, lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct WarningCache<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> WarningCache<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replaces the stored warning set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`](super::error::Error::Storage) when the value
    /// cannot be encoded or written.
    pub fn save(&self, warnings: &[OvertimeWarning]) -> Result<()> {
        let value = serde_json::to_string(warnings)?;
        self.store.set(WARNINGS_KEY, &value)
    }

    /// Returns the stored warning set, empty when nothing usable is stored.
    pub fn load(&self) -> Vec<OvertimeWarning> {
        let value = match self.store.get(WARNINGS_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("{}", Message::WarningCacheReadFailed(err.to_string()));
                return Vec::new();
            }
        };

        serde_json::from_str(&value).unwrap_or_else(|err| {
            tracing::warn!("{}", Message::WarningCacheCorrupted(err.to_string()));
            Vec::new()
        })
    }

    /// Recomputes the warnings from the backend's work times and stores them.
    pub async fn refresh<B: Backend>(&self, backend: &B) -> Vec<OvertimeWarning> {
        let warnings = detect_from(backend).await;
        if let Err(err) = self.save(&warnings) {
            tracing::warn!("{}", Message::WarningCacheWriteFailed(err.to_string()));
        }
        warnings
    }
}
