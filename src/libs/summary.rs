//! Daily aggregation of work-time records.
//!
//! Sums the recorded `dauer` of every [`ArbeitszeitEntry`] per calendar date.
//! The stored duration is trusted as-is; `start`/`stop` are only compared
//! against it for diagnostics.
//!
//! Records are skipped, never rejected:
//! - missing or blank `datum` or `dauer`
//! - `datum` that is not a calendar date
//! - `dauer` that fails [`parse_duration`]
//!
//! ```rust
//! use liftlog::libs::entry::ArbeitszeitEntry;
//! use liftlog::libs::summary::DailyAggregator;
//!
//! let entries = vec![
//!     ArbeitszeitEntry::new("2024-01-15", "05:00"),
//!     ArbeitszeitEntry::new("2024-01-15", "04:00"),
//! ];
//! let totals = entries.daily_totals();
//! assert_eq!(totals.values().copied().collect::<Vec<_>>(), vec![540]);
//! ```

use super::duration::{format_duration, parse_duration};
use super::entry::{parse_calendar_date, ArbeitszeitEntry};
use super::overtime::OVERTIME_THRESHOLD_MINUTES;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Minutes worked per calendar date, built fresh on every aggregation run.
pub type DailyTotals = BTreeMap<NaiveDate, u32>;

pub trait DailyAggregator {
    fn daily_totals(&self) -> DailyTotals;
}

impl DailyAggregator for [ArbeitszeitEntry] {
    fn daily_totals(&self) -> DailyTotals {
        let mut totals = DailyTotals::new();

        for entry in self {
            let (Some(datum), Some(dauer)) = (non_blank(&entry.datum), non_blank(&entry.dauer)) else {
                continue;
            };

            let Some(date) = parse_calendar_date(datum) else {
                tracing::debug!(datum, "skipping work time with unreadable date");
                continue;
            };

            let minutes = match parse_duration(dauer) {
                Ok(minutes) => minutes,
                Err(err) => {
                    tracing::debug!(%date, error = %err, "skipping work time with malformed duration");
                    continue;
                }
            };

            if let Some(span) = entry.recorded_span() {
                if span != minutes {
                    tracing::debug!(%date, dauer, span, "recorded duration differs from start/stop");
                }
            }

            let total = totals.entry(date).or_insert(0);
            *total = total.saturating_add(minutes);
        }

        totals
    }
}

impl DailyAggregator for Vec<ArbeitszeitEntry> {
    fn daily_totals(&self) -> DailyTotals {
        self.as_slice().daily_totals()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// One formatted row of the per-day totals view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub minutes: u32,
    pub total: String,
    pub overtime: bool,
}

pub trait SummaryFormatter {
    fn format_summary(&self) -> Vec<DailySummary>;
}

impl SummaryFormatter for DailyTotals {
    fn format_summary(&self) -> Vec<DailySummary> {
        self.iter()
            .map(|(date, minutes)| DailySummary {
                date: *date,
                minutes: *minutes,
                total: format_duration(*minutes),
                overtime: *minutes > OVERTIME_THRESHOLD_MINUTES,
            })
            .collect()
    }
}
