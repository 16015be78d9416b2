//! Local persistence for the liftlog application.
//!
//! Time entries and work-time records belong to the backend; the only state
//! kept on this machine is the overtime warning cache. It lives in a SQLite
//! database in the application data directory.
//!
//! ```rust
//! use liftlog::db::kv_store::KvStore;
//! use liftlog::libs::warning_cache::KeyValueStore;
//!
//! let store = KvStore::in_memory().unwrap();
//! store.set("greeting", "hello").unwrap();
//! assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
//! ```

/// Connection management; every connection is migrated on open.
pub mod db;

/// Persistent key/value table backing the warning cache.
pub mod kv_store;

/// Versioned schema changes.
pub mod migrations;
