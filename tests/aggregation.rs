#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use liftlog::libs::entry::ArbeitszeitEntry;
    use liftlog::libs::overtime::{detect, OvertimeWarning, OVERTIME_THRESHOLD_MINUTES};
    use liftlog::libs::summary::{DailyAggregator, SummaryFormatter};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(datum: Option<&str>, dauer: Option<&str>) -> ArbeitszeitEntry {
        ArbeitszeitEntry {
            datum: datum.map(str::to_string),
            dauer: dauer.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_sums_entries_of_same_day() {
        let entries = vec![
            ArbeitszeitEntry::new("2024-01-15", "05:00"),
            ArbeitszeitEntry::new("2024-01-15", "04:00"),
        ];
        let totals = entries.daily_totals();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&date(2024, 1, 15)], 540);

        let warnings = detect(&totals);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].date, "15.1.2024");
        assert_eq!(warnings[0].total_hours, "9:00");
    }

    #[test]
    fn test_no_warning_below_threshold() {
        let entries = vec![ArbeitszeitEntry::new("2024-01-15", "08:00")];
        let totals = entries.daily_totals();
        assert_eq!(totals[&date(2024, 1, 15)], 480);
        assert!(detect(&totals).is_empty());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let at_limit = vec![ArbeitszeitEntry::new("2024-03-01", "8:30")];
        assert_eq!(OVERTIME_THRESHOLD_MINUTES, 510);
        assert!(detect(&at_limit.daily_totals()).is_empty());

        let over_limit = vec![ArbeitszeitEntry::new("2024-03-01", "8:31")];
        let warnings = detect(&over_limit.daily_totals());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].total_hours, "8:31");
    }

    #[test]
    fn test_each_day_is_checked_separately() {
        let entries = vec![
            ArbeitszeitEntry::new("2024-02-02", "06:00"),
            ArbeitszeitEntry::new("2024-02-01", "09:15"),
            ArbeitszeitEntry::new("2024-02-02", "03:00"),
            ArbeitszeitEntry::new("2024-02-03", "04:00"),
        ];
        let totals = entries.daily_totals();
        assert_eq!(totals.len(), 3);

        let warnings = detect(&totals);
        let dates: Vec<&str> = warnings.iter().map(|w| w.date.as_str()).collect();
        assert_eq!(dates, vec!["1.2.2024", "2.2.2024"]);
        assert_eq!(warnings[1].total_hours, "9:00");
    }

    #[test]
    fn test_skips_entries_missing_fields() {
        let entries = vec![
            entry(Some("2024-01-15"), None),
            entry(None, Some("09:00")),
            entry(Some(""), Some("09:00")),
            entry(Some("2024-01-15"), Some("  ")),
            entry(Some("2024-01-15"), Some("02:00")),
        ];
        let totals = entries.daily_totals();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&date(2024, 1, 15)], 120);
    }

    #[test]
    fn test_skips_malformed_values() {
        let entries = vec![
            ArbeitszeitEntry::new("2024-01-15", "8:75"),
            ArbeitszeitEntry::new("not a date", "09:00"),
            ArbeitszeitEntry::new("2024-01-15", "01:30"),
        ];
        let totals = entries.daily_totals();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&date(2024, 1, 15)], 90);
    }

    #[test]
    fn test_timestamp_dates_share_the_calendar_day() {
        let entries = vec![
            ArbeitszeitEntry::new("2024-01-15T00:00:00.000Z", "05:00"),
            ArbeitszeitEntry::new("2024-01-15", "04:00"),
        ];
        let totals = entries.daily_totals();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&date(2024, 1, 15)], 540);
    }

    #[test]
    fn test_dotted_dates_are_counted() {
        let entries = vec![
            ArbeitszeitEntry::new("15.01.2024", "05:00"),
            ArbeitszeitEntry::new("15.01.2024", "04:00"),
        ];
        let totals = entries.daily_totals();
        assert_eq!(totals[&date(2024, 1, 15)], 540);

        let warnings = detect(&totals);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].date, "15.1.2024");
    }

    #[test]
    fn test_dotted_and_iso_dates_share_the_day() {
        let entries = vec![
            ArbeitszeitEntry::new("15.01.2024", "05:00"),
            ArbeitszeitEntry::new("2024-01-15T07:30:00Z", "04:00"),
        ];
        let totals = entries.daily_totals();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[&date(2024, 1, 15)], 540);
    }

    #[test]
    fn test_dates_with_trailing_text_are_skipped() {
        let entries = vec![
            ArbeitszeitEntry::new("2024-01-15xyz", "09:00"),
            ArbeitszeitEntry::new("2024-01-15", "01:00"),
        ];
        let totals = entries.daily_totals();
        assert_eq!(totals[&date(2024, 1, 15)], 60);
        assert!(detect(&totals).is_empty());
    }

    #[test]
    fn test_recorded_duration_wins_over_start_stop() {
        let entries = vec![ArbeitszeitEntry {
            datum: Some("2024-01-15".to_string()),
            start: Some("07:00".to_string()),
            stop: Some("12:00".to_string()),
            dauer: Some("09:00".to_string()),
            ..Default::default()
        }];
        assert_eq!(entries.daily_totals()[&date(2024, 1, 15)], 540);
    }

    #[test]
    fn test_empty_input() {
        let entries: Vec<ArbeitszeitEntry> = Vec::new();
        assert!(entries.daily_totals().is_empty());
        assert!(detect(&entries.daily_totals()).is_empty());
    }

    #[test]
    fn test_warning_message_text() {
        let warning = OvertimeWarning::new(date(2024, 1, 15), 540);
        assert_eq!(warning.message, "Overtime on 15.1.2024: 9:00 hours worked, more than the allowed 8:30 hours");
    }

    #[test]
    fn test_warning_serializes_camel_case() {
        let warning = OvertimeWarning::new(date(2024, 11, 5), 600);
        let json = serde_json::to_value(&warning).unwrap();
        assert_eq!(json["date"], "5.11.2024");
        assert_eq!(json["totalHours"], "10:00");
        assert!(json["message"].as_str().unwrap().contains("10:00"));
    }

    #[test]
    fn test_summary_marks_overtime_days() {
        let entries = vec![
            ArbeitszeitEntry::new("2024-01-16", "08:30"),
            ArbeitszeitEntry::new("2024-01-15", "08:31"),
        ];
        let summary = entries.daily_totals().format_summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].date, date(2024, 1, 15));
        assert_eq!(summary[0].total, "8:31");
        assert!(summary[0].overtime);
        assert_eq!(summary[1].total, "8:30");
        assert!(!summary[1].overtime);
    }
}
