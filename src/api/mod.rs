//! Backend API integration.
//!
//! The dashboard backend owns all time entries and work-time records. The
//! engine talks to it only through the [`Backend`] trait, so the overtime
//! pipeline and the approval workflow can run against the HTTP client in
//! production and against an in-memory double in tests.
//!
//! ## Endpoints used by [`BackendClient`]
//!
//! - `GET  {api_url}/arbeitszeiten` - every work-time record
//! - `GET  {api_url}/time-entries` - every time entry
//! - `POST {api_url}/time-entries` - submit a new entry
//! - `POST {api_url}/time-entries/{id}/approve` - approve an entry
//! - `POST {api_url}/time-entries/{id}/reject` - reject an entry

use crate::libs::entry::{ArbeitszeitEntry, Decision, EntryId, TimeEntry, TimeEntryDraft};
use crate::libs::error::Result;

pub mod backend;

pub use backend::{BackendClient, BackendConfig};

/// Contract of the external backend collaborator.
///
/// Every call is a suspension point. Implementations report unreachable
/// hosts, non-2xx answers and undecodable bodies as
/// [`Error::Fetch`](crate::libs::error::Error::Fetch).
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// Returns the full current sequence of work-time records.
    async fn fetch_work_times(&self) -> Result<Vec<ArbeitszeitEntry>>;

    /// Returns the full current sequence of time entries.
    async fn fetch_time_entries(&self) -> Result<Vec<TimeEntry>>;

    /// Records a supervisor decision for one entry.
    ///
    /// The optional comment is an audit annotation stored with the entry.
    async fn decide(&self, id: &EntryId, decision: Decision, comment: Option<&str>) -> Result<()>;

    /// Submits a new entry; the backend stores it as `pending`.
    async fn create_entry(&self, draft: &TimeEntryDraft) -> Result<()>;
}

impl<B: Backend> Backend for &B {
    async fn fetch_work_times(&self) -> Result<Vec<ArbeitszeitEntry>> {
        (**self).fetch_work_times().await
    }

    async fn fetch_time_entries(&self) -> Result<Vec<TimeEntry>> {
        (**self).fetch_time_entries().await
    }

    async fn decide(&self, id: &EntryId, decision: Decision, comment: Option<&str>) -> Result<()> {
        (**self).decide(id, decision, comment).await
    }

    async fn create_entry(&self, draft: &TimeEntryDraft) -> Result<()> {
        (**self).create_entry(draft).await
    }
}
