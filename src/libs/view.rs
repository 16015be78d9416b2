use super::duration::format_duration;
use super::entry::TimeEntry;
use super::overtime::OvertimeWarning;
use super::summary::DailySummary;
use prettytable::{row, Table};

/// Console tables for the command output.
pub struct View {}

impl View {
    /// One row per overtime warning, in the order given.
    pub fn warnings(warnings: &[OvertimeWarning]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "HOURS", "MESSAGE"]);
        for warning in warnings {
            table.add_row(row![warning.date, warning.total_hours, warning.message]);
        }
        table.printstd();
    }

    /// Full detail of each time entry. Durations that cannot be computed show as `--:--`.
    pub fn entries(entries: &[TimeEntry]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "FROM", "TO", "DURATION", "ELEVATOR", "LOCATION", "ACTIVITY", "ON CALL", "STAFF", "STATUS"]);
        for entry in entries {
            table.add_row(row![
                entry.id,
                entry.date.format("%d.%m.%Y"),
                entry.start_time.format("%H:%M"),
                entry.end_time.format("%H:%M"),
                entry.duration_minutes().map(format_duration).unwrap_or_else(|| "--:--".to_string()),
                entry.elevator_id,
                entry.location,
                entry.activity(),
                if entry.emergency_week { "yes" } else { "" },
                entry.mitarbeiter,
                entry.status
            ]);
        }
        table.printstd();
    }

    /// Per-day totals, flagging days above the overtime threshold.
    pub fn daily_totals(summaries: &[DailySummary]) {
        let mut table = Table::new();

        table.add_row(row!["DATE", "HOURS", ""]);
        for summary in summaries {
            table.add_row(row![
                summary.date.format("%d.%m.%Y"),
                summary.total,
                if summary.overtime { "overtime" } else { "" }
            ]);
        }
        table.printstd();
    }
}
