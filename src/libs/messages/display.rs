//! Display implementation for liftlog application messages.
//!
//! All user-facing text lives in this one `match`, so wording stays
//! consistent between the command-line output and the overtime warnings
//! stored in the warning cache.
//!
//! ## Usage Integration
//!
//! ```rust
//! use liftlog::libs::messages::Message;
//! use liftlog::{msg_info, msg_error};
//!
//! msg_info!(Message::NoOvertimeWarnings);
//! msg_error!(Message::BackendNotConfigured);
//! ```

use super::types::Message;
use crate::libs::duration::format_duration;
use crate::libs::overtime::OVERTIME_THRESHOLD_MINUTES;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigModuleBackend => "Backend API settings".to_string(),
            Message::BackendNotConfigured => {
                "Backend API is not configured. Run 'liftlog init' or set LIFTLOG_API_URL.".to_string()
            }

            // === OVERTIME MESSAGES ===
            Message::OvertimeWarning { date, total_hours } => format!(
                "Overtime on {}: {} hours worked, more than the allowed {} hours",
                date,
                total_hours,
                format_duration(OVERTIME_THRESHOLD_MINUTES)
            ),
            Message::OvertimeWarningsHeader(count) => format!("Overtime warnings ({})", count),
            Message::NoOvertimeWarnings => "No overtime found.".to_string(),
            Message::WarningsRefreshed(count) => format!("Overtime check finished, {} warning(s) stored.", count),
            Message::WorkTimesFetchFailed(error) => format!("Failed to fetch work times, overtime check skipped: {}", error),
            Message::WarningCacheReadFailed(error) => format!("Failed to read stored overtime warnings: {}", error),
            Message::WarningCacheCorrupted(error) => format!("Stored overtime warnings are unreadable and were ignored: {}", error),
            Message::WarningCacheWriteFailed(error) => format!("Failed to store overtime warnings: {}", error),

            // === DAILY TOTALS MESSAGES ===
            Message::DailyTotalsHeader => "Working hours per day".to_string(),
            Message::DailyTotalsForDate(date, total) => format!("Working hours for {}: {}", date, total),
            Message::NoWorkTimes => "No work times recorded.".to_string(),

            // === ENTRY MESSAGES ===
            Message::PendingEntriesHeader(count) => format!("Entries awaiting approval ({})", count),
            Message::EntriesHeader(count) => format!("Time entries ({})", count),
            Message::NoPendingEntries => "No entries awaiting approval.".to_string(),
            Message::NoEntries => "No time entries found.".to_string(),
            Message::NoEntryIdsProvided => "No entry IDs provided.".to_string(),
            Message::EntrySubmitted(date) => format!("Time entry for {} submitted for approval", date),
            Message::DuplicateEntryId(id) => format!("Backend returned entry {} more than once, keeping the last one", id),

            // === APPROVAL MESSAGES ===
            Message::EntryApproved(id) => format!("Entry {} approved", id),
            Message::EntryRejected(id) => format!("Entry {} rejected", id),
            Message::TransitionFailed { id, error } => format!("Entry {} was not changed: {}", id, error),
            Message::TransitionsFailed(count) => format!("{} entry decision(s) failed, see messages above", count),
            Message::ReloadAfterTransitionFailed(error) => {
                format!("Decision was recorded, but the entry list could not be reloaded: {}", error)
            }
            Message::ReloadAfterSubmitFailed(error) => {
                format!("Entry was submitted, but the entry list could not be reloaded: {}", error)
            }

            // === MIGRATION MESSAGES ===
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptBackendApiUrl => "Enter the backend API URL".to_string(),
            Message::PromptBackendAuthToken => "Enter the backend API token (leave empty if not required)".to_string(),
            Message::PromptBackendTimeout => "Request timeout in seconds".to_string(),
        };
        write!(f, "{}", text)
    }
}
