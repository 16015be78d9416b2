//! Conversion between `H:MM` duration text and whole minutes.
//!
//! Work-time records carry their length as text (`"8:30"`, `"05:00"`).
//! Everything that sums, compares or displays durations goes through the
//! two functions in this module so that the textual form is handled in
//! exactly one place.
//!
//! ## Format
//!
//! - **Parsing** accepts one or more ASCII digits for hours, a colon, and
//!   exactly two ASCII digits for minutes. Minutes must be below 60.
//!   Leading zeros on hours are accepted (`"05:00"` is 300 minutes).
//! - **Formatting** writes hours without leading zeros and minutes
//!   zero-padded to two digits (`300` → `"5:00"`, `45` → `"0:45"`).
//!
//! ## Examples
//!
//! ```rust
//! use liftlog::libs::duration::{format_duration, parse_duration};
//!
//! assert_eq!(parse_duration("8:30").unwrap(), 510);
//! assert_eq!(format_duration(540), "9:00");
//! assert!(parse_duration("8:75").is_err());
//! ```

use thiserror::Error;

/// Malformed duration text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration '{input}': {reason}")]
pub struct FormatError {
    /// The text that failed to parse, as given.
    pub input: String,
    /// Short description of the violated rule.
    pub reason: &'static str,
}

impl FormatError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

/// Parses `H:MM` text into a number of minutes.
///
/// Surrounding whitespace is ignored. The hour part may have any number of
/// digits, the minute part must have exactly two and be below 60.
///
/// # Errors
///
/// Returns [`FormatError`] when the text does not match `digits ":" two-digits`,
/// when the minutes are 60 or more, or when the value does not fit in `u32`.
pub fn parse_duration(text: &str) -> Result<u32, FormatError> {
    let trimmed = text.trim();
    let (hours, minutes) = trimmed.split_once(':').ok_or_else(|| FormatError::new(text, "missing ':' separator"))?;

    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::new(text, "hours must be digits"));
    }
    if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::new(text, "minutes must be two digits"));
    }

    let hours: u32 = hours.parse().map_err(|_| FormatError::new(text, "hours out of range"))?;
    let minutes: u32 = minutes.parse().map_err(|_| FormatError::new(text, "minutes must be two digits"))?;
    if minutes >= 60 {
        return Err(FormatError::new(text, "minutes must be below 60"));
    }

    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .ok_or_else(|| FormatError::new(text, "hours out of range"))
}

/// Formats a number of minutes as `H:MM`.
///
/// Hours carry no leading zero, minutes are always two digits.
pub fn format_duration(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
