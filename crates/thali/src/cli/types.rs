//! CLI value parsers.

use chrono::{NaiveTime, Timelike};

/// Parse a 24-hour `HH:MM` time of day into its HHMM value.
///
/// # Errors
///
/// Returns a message suitable for clap when the input is not a valid time.
pub fn parse_time(input: &str) -> Result<u32, String> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map(|time| time.hour() * 100 + time.minute())
        .map_err(|_| format!("invalid time '{input}': expected 24-hour HH:MM, e.g. 13:05"))
}
