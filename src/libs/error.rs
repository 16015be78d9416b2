//! Error type shared by the time-entry engine.
//!
//! The engine distinguishes failures by how callers are expected to react
//! to them. Fetch and storage failures are recovered inside the overtime
//! pipeline, while transition failures always reach the user.

use super::duration::FormatError;
use super::entry::{EntryId, EntryStatus};
use thiserror::Error;

/// Failures of the time-entry engine.
#[derive(Debug, Error)]
pub enum Error {
    // ---------------------------
    // Parsing
    // ---------------------------
    /// A duration text that is not `H:MM`.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A draft that fails validation, or unreadable user input.
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    // ---------------------------
    // Backend
    // ---------------------------
    /// The backend could not be reached or answered with a non-2xx status.
    #[error("Backend request failed: {0}")]
    Fetch(String),

    /// Missing or unusable backend settings.
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Workflow
    // ---------------------------
    /// The entry is already in a terminal state.
    #[error("Entry {id} is {from} and cannot become {to}")]
    InvalidTransition { id: EntryId, from: EntryStatus, to: EntryStatus },

    /// The id is unknown after the latest reload.
    #[error("Entry {0} not found")]
    EntryNotFound(EntryId),

    /// Another decision for the same id has not finished yet.
    #[error("Entry {0} already has a transition in progress")]
    TransitionInFlight(EntryId),

    // ---------------------------
    // Warning cache
    // ---------------------------
    /// The local key/value store or its JSON payload failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
