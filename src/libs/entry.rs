//! Work-time data model.
//!
//! Two record kinds come from the backend:
//!
//! - [`TimeEntry`] - a unit of logged work that goes through approval
//!   (`pending` → `approved` | `rejected`).
//! - [`ArbeitszeitEntry`] - a lower-level duration record. Its `dauer`
//!   field feeds the daily overtime aggregation.
//!
//! The backend is loosely typed: ids arrive as numbers or strings, on-call
//! flags as booleans, numbers or words, dates with or without a time part.
//! Deserialization here normalizes all of that so the rest of the engine
//! works with strong types.

use super::error::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Identifier of a time entry or work-time record.
///
/// Kept as text; numeric ids from the backend are converted on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.trim().to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId::from(value.as_str())
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        EntryId(value.to_string())
    }
}

impl Serialize for EntryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Number(i64),
            Text(String),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Number(n) => Ok(EntryId::from(n)),
            RawId::Text(s) if s.trim().is_empty() => Err(de::Error::custom("entry id must not be empty")),
            RawId::Text(s) => Ok(EntryId::from(s)),
        }
    }
}

/// Approval state of a [`TimeEntry`].
///
/// `Approved` and `Rejected` are terminal: once reached, no decision
/// changes them again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl EntryStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, EntryStatus::Pending)
    }

    /// Returns the state reached by applying `decision`, or `None` when the
    /// current state does not allow it.
    pub fn apply(self, decision: Decision) -> Option<EntryStatus> {
        match self {
            EntryStatus::Pending => Some(decision.target()),
            EntryStatus::Approved | EntryStatus::Rejected => None,
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EntryStatus::Pending => "pending",
            EntryStatus::Approved => "approved",
            EntryStatus::Rejected => "rejected",
        };
        f.write_str(text)
    }
}

/// A supervisor's verdict on a pending entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    pub fn target(self) -> EntryStatus {
        match self {
            Decision::Approve => EntryStatus::Approved,
            Decision::Reject => EntryStatus::Rejected,
        }
    }

    /// Path segment of the backend endpoint carrying out this decision.
    pub fn endpoint(self) -> &'static str {
        match self {
            Decision::Approve => "approve",
            Decision::Reject => "reject",
        }
    }
}

/// One real-world unit of logged work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: EntryId,
    #[serde(default)]
    pub elevator_id: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub activity_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    #[serde(default, deserialize_with = "bool_like")]
    pub emergency_week: bool,
    #[serde(default)]
    pub status: EntryStatus,
    #[serde(default)]
    pub mitarbeiter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<serde_json::Value>,
}

impl TimeEntry {
    pub fn is_pending(&self) -> bool {
        self.status == EntryStatus::Pending
    }

    /// Minutes between start and end, `None` when the end is not after the start.
    pub fn duration_minutes(&self) -> Option<u32> {
        span_minutes(self.start_time, self.end_time)
    }

    /// Activity label, preferring the free-text variant for "other" activities.
    pub fn activity(&self) -> &str {
        match (&self.other_activity, self.activity_type.as_str()) {
            (Some(other), _) if !other.trim().is_empty() => other,
            (_, activity) => activity,
        }
    }
}

/// Activity type that requires a free-text description.
pub const OTHER_ACTIVITY: &str = "other";

/// Input for creating a new [`TimeEntry`].
///
/// A draft has no status: every submitted entry starts out `pending`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryDraft {
    pub elevator_id: String,
    pub location: String,
    pub activity_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    #[serde(with = "clock_time")]
    pub start_time: NaiveTime,
    #[serde(with = "clock_time")]
    pub end_time: NaiveTime,
    pub emergency_week: bool,
    pub mitarbeiter: String,
}

/// Validated draft ready to be sent to the backend, always `pending`.
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    #[serde(flatten)]
    draft: &'a TimeEntryDraft,
    status: EntryStatus,
}

impl TimeEntryDraft {
    /// Checks the draft against the entry invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntry`] when a required field is blank, when
    /// an "other" activity has no description, or when the end time is not
    /// strictly after the start time.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("elevatorId", &self.elevator_id),
            ("location", &self.location),
            ("activityType", &self.activity_type),
            ("mitarbeiter", &self.mitarbeiter),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(Error::InvalidEntry(format!("{} must not be empty", name)));
        }

        if self.activity_type.eq_ignore_ascii_case(OTHER_ACTIVITY) && self.other_activity.as_deref().map_or(true, |a| a.trim().is_empty()) {
            return Err(Error::InvalidEntry("otherActivity is required for activity type 'other'".to_string()));
        }

        if self.end_time <= self.start_time {
            return Err(Error::InvalidEntry(format!(
                "end time {} must be after start time {}",
                self.end_time.format("%H:%M"),
                self.start_time.format("%H:%M")
            )));
        }
        Ok(())
    }

    /// Validates the draft and wraps it as a `pending` submission.
    pub fn submission(&self) -> Result<Submission<'_>> {
        self.validate()?;
        Ok(Submission {
            draft: self,
            status: EntryStatus::Pending,
        })
    }
}

/// Origin of a work-time record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EntrySource {
    Manual,
    Derived,
    Other(String),
}

impl From<String> for EntrySource {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "manual" | "manuell" => EntrySource::Manual,
            "derived" | "abgeleitet" => EntrySource::Derived,
            _ => EntrySource::Other(value),
        }
    }
}

impl From<EntrySource> for String {
    fn from(value: EntrySource) -> Self {
        match value {
            EntrySource::Manual => "manual".to_string(),
            EntrySource::Derived => "derived".to_string(),
            EntrySource::Other(other) => other,
        }
    }
}

/// Duration record feeding the daily aggregation.
///
/// Every field is optional: manual entry produces partial records, and the
/// aggregation skips what it cannot use instead of rejecting the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArbeitszeitEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    #[serde(default)]
    pub datum: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub stop: Option<String>,
    #[serde(default)]
    pub dauer: Option<String>,
    #[serde(default, deserialize_with = "bool_like")]
    pub notdienstwoche: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quelle: Option<EntrySource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bemerkung: Option<String>,
}

impl ArbeitszeitEntry {
    /// Shorthand for a record carrying only a date and a duration.
    pub fn new(datum: &str, dauer: &str) -> Self {
        Self {
            datum: Some(datum.to_string()),
            dauer: Some(dauer.to_string()),
            ..Default::default()
        }
    }

    /// Minutes between `start` and `stop` when both are readable clock times.
    pub fn recorded_span(&self) -> Option<u32> {
        let start = parse_clock_time(self.start.as_deref()?)?;
        let stop = parse_clock_time(self.stop.as_deref()?)?;
        span_minutes(start, stop)
    }
}

const CALENDAR_DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d.%m.%Y"];

/// Reads a calendar date given as `YYYY-MM-DD` or `DD.MM.YYYY`.
///
/// A time part may follow after `T` or a space and is ignored. Anything else
/// after the date makes the text unreadable.
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let date_part = text.trim().split(|c| c == 'T' || c == ' ').next()?;
    CALENDAR_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
}

/// Reads a wall-clock time given as `HH:MM` or `HH:MM:SS`.
pub fn parse_clock_time(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

fn span_minutes(start: NaiveTime, end: NaiveTime) -> Option<u32> {
    let minutes = (end - start).num_minutes();
    u32::try_from(minutes).ok().filter(|m| *m > 0)
}

/// Accepts booleans, numbers and the usual yes/no words for flag fields.
fn bool_like<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Number(i64),
        Text(String),
    }

    match Option::<RawFlag>::deserialize(deserializer)? {
        None => Ok(false),
        Some(RawFlag::Bool(flag)) => Ok(flag),
        Some(RawFlag::Number(n)) => Ok(n != 0),
        Some(RawFlag::Text(text)) => match text.trim().to_lowercase().as_str() {
            "true" | "ja" | "yes" | "1" => Ok(true),
            "false" | "nein" | "no" | "0" | "" => Ok(false),
            other => Err(de::Error::custom(format!("unrecognized flag value '{}'", other))),
        },
    }
}

mod calendar_date {
    use super::parse_calendar_date;
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format("%Y-%m-%d").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_calendar_date(&text).ok_or_else(|| de::Error::custom(format!("invalid date '{}'", text)))
    }
}

mod clock_time {
    use super::parse_clock_time;
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_clock_time(&text).ok_or_else(|| de::Error::custom(format!("invalid time '{}'", text)))
    }
}
