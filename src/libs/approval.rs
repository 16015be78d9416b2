//! Approval workflow for time entries.
//!
//! Drives the `pending → approved | rejected` state machine against the
//! backend. A decision is checked against the locally known status first,
//! then sent to the backend, then the entry collection is reloaded so every
//! view sees the backend's state.
//!
//! ## Rules
//!
//! - Only `pending` entries accept a decision. Deciding on an `approved` or
//!   `rejected` entry fails with [`Error::InvalidTransition`]; it is never a
//!   silent no-op.
//! - One local decision per entry at a time. A second decision for an id
//!   whose first request has not returned yet fails with
//!   [`Error::TransitionInFlight`]. Decisions for different ids may run
//!   concurrently.
//! - Backend failures are returned to the caller, who must report them.
//!
//! ```rust,no_run
//! use liftlog::api::{BackendClient, BackendConfig};
//! use liftlog::libs::approval::ApprovalWorkflow;
//! use liftlog::libs::entry::EntryId;
//!
//! # async fn run() -> liftlog::libs::error::Result<()> {
//! let backend = BackendClient::new(&BackendConfig::default())?;
//! let workflow = ApprovalWorkflow::new(backend);
//! workflow.reload().await?;
//! for entry in workflow.list_pending() {
//!     println!("{} {}", entry.id, entry.date);
//! }
//! workflow.approve(&EntryId::from("42")).await?;
//! # Ok(())
//! # }
//! ```

use super::entry::{Decision, EntryId, EntryStatus, TimeEntry, TimeEntryDraft};
use super::error::{Error, Result};
use super::messages::Message;
use super::store::EntryStore;
use crate::api::Backend;
use parking_lot::{Mutex, RwLock};
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};

/// Approval state machine driven against a [`Backend`].
///
/// Holds the session's [`EntryStore`] and the ids with a decision in flight.
pub struct ApprovalWorkflow<B: Backend> {
    backend: B,
    store: RwLock<EntryStore>,
    in_flight: Mutex<HashSet<EntryId>>,
    reloads: AtomicU64,
}

impl<B: Backend> ApprovalWorkflow<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            store: RwLock::new(EntryStore::new()),
            in_flight: Mutex::new(HashSet::new()),
            reloads: AtomicU64::new(0),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replaces the local entries with the backend's current collection.
    ///
    /// Overlapping reloads are ordered by when they started: a response that
    /// arrives after a newer one has been applied is dropped. Returns the
    /// number of entries held afterwards.
    pub async fn reload(&self) -> Result<usize> {
        let generation = self.reloads.fetch_add(1, Ordering::SeqCst) + 1;
        let fetched = self.backend.fetch_time_entries().await?;

        let mut store = self.store.write();
        if !store.apply_snapshot(generation, fetched) {
            tracing::debug!(generation, current = store.generation(), "dropping stale entry snapshot");
        }
        Ok(store.len())
    }

    pub fn entries(&self) -> Vec<TimeEntry> {
        self.store.read().entries().to_vec()
    }

    pub fn list_pending(&self) -> Vec<TimeEntry> {
        self.store.read().list_pending()
    }

    pub fn status_of(&self, id: &EntryId) -> Option<EntryStatus> {
        self.store.read().status_of(id)
    }

    pub async fn approve(&self, id: &EntryId) -> Result<EntryStatus> {
        self.decide(id, Decision::Approve, None).await
    }

    pub async fn reject(&self, id: &EntryId) -> Result<EntryStatus> {
        self.decide(id, Decision::Reject, None).await
    }

    /// Applies `decision` to the entry `id`, with an optional audit comment.
    ///
    /// Loads the entries first when nothing has been loaded yet. On success
    /// returns the status the entry moved to. A failing reload after an
    /// accepted decision is logged only; the decision itself stands.
    ///
    /// # Errors
    ///
    /// - [`Error::TransitionInFlight`] when another decision for `id` is running
    /// - [`Error::EntryNotFound`] when `id` is unknown after the latest reload
    /// - [`Error::InvalidTransition`] when the entry is no longer `pending`
    /// - [`Error::Fetch`] when the backend rejects or cannot be reached
    pub async fn decide(&self, id: &EntryId, decision: Decision, comment: Option<&str>) -> Result<EntryStatus> {
        let _guard = InFlightGuard::acquire(&self.in_flight, id)?;

        if !self.store.read().is_loaded() {
            self.reload().await?;
        }

        let current = self.status_of(id).ok_or_else(|| Error::EntryNotFound(id.clone()))?;
        let target = current.apply(decision).ok_or_else(|| Error::InvalidTransition {
            id: id.clone(),
            from: current,
            to: decision.target(),
        })?;

        self.backend.decide(id, decision, comment).await?;
        tracing::info!(%id, status = %target, "entry decision accepted");

        if let Err(err) = self.reload().await {
            tracing::warn!("{}", Message::ReloadAfterTransitionFailed(err.to_string()));
        }

        Ok(target)
    }

    /// Validates and submits a new entry, then reloads so it is listed as `pending`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEntry`] when the draft breaks an entry invariant
    /// - [`Error::Fetch`] when the backend rejects or cannot be reached
    pub async fn submit(&self, draft: &TimeEntryDraft) -> Result<()> {
        draft.validate()?;
        self.backend.create_entry(draft).await?;
        tracing::info!(date = %draft.date, elevator = %draft.elevator_id, "entry submitted");

        if let Err(err) = self.reload().await {
            tracing::warn!("{}", Message::ReloadAfterSubmitFailed(err.to_string()));
        }
        Ok(())
    }
}

/// Marks an entry id as having a decision in flight until dropped.
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<EntryId>>,
    id: EntryId,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(in_flight: &'a Mutex<HashSet<EntryId>>, id: &EntryId) -> Result<Self> {
        if !in_flight.lock().insert(id.clone()) {
            return Err(Error::TransitionInFlight(id.clone()));
        }
        Ok(Self { in_flight, id: id.clone() })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.lock().remove(&self.id);
    }
}
