//! Overtime detection on top of the daily totals.
//!
//! Any date whose total is strictly above [`OVERTIME_THRESHOLD_MINUTES`]
//! yields one [`OvertimeWarning`]. Detection is advisory: when the backend
//! cannot deliver work times, [`detect_from`] logs the failure and reports
//! no warnings instead of an error.

use super::duration::format_duration;
use super::messages::Message;
use super::summary::{DailyAggregator, DailyTotals};
use crate::api::Backend;
use crate::msg_debug;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Maximum minutes per calendar date before a warning is raised (8:30).
pub const OVERTIME_THRESHOLD_MINUTES: u32 = 510;

/// Display format of warning dates, day/month/year without padding.
pub const WARNING_DATE_FORMAT: &str = "%-d.%-m.%Y";

/// Advisory record for a date above the overtime threshold.
///
/// Serialized with the field names `date`, `totalHours` and `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OvertimeWarning {
    pub date: String,
    pub total_hours: String,
    pub message: String,
}

impl OvertimeWarning {
    pub fn new(date: NaiveDate, total_minutes: u32) -> Self {
        let date = date.format(WARNING_DATE_FORMAT).to_string();
        let total_hours = format_duration(total_minutes);
        let message = Message::OvertimeWarning {
            date: date.clone(),
            total_hours: total_hours.clone(),
        }
        .to_string();

        Self { date, total_hours, message }
    }
}

/// Emits one warning per date above the threshold, ordered by date.
pub fn detect(totals: &DailyTotals) -> Vec<OvertimeWarning> {
    totals
        .iter()
        .filter(|(_, minutes)| **minutes > OVERTIME_THRESHOLD_MINUTES)
        .map(|(date, minutes)| OvertimeWarning::new(*date, *minutes))
        .collect()
}

/// Fetches the current work times and runs aggregation and detection.
///
/// A failing backend yields an empty warning set; the error is only logged.
pub async fn detect_from<B: Backend>(backend: &B) -> Vec<OvertimeWarning> {
    match backend.fetch_work_times().await {
        Ok(entries) => {
            let warnings = detect(&entries.daily_totals());
            msg_debug!(format!("{} work time record(s), {} overtime warning(s)", entries.len(), warnings.len()));
            warnings
        }
        Err(err) => {
            tracing::warn!("{}", Message::WorkTimesFetchFailed(err.to_string()));
            Vec::new()
        }
    }
}
