//! Opening hours and the moment they are evaluated at.
//!
//! Times of day are compared as HHMM integers (`hours * 100 + minutes`), so
//! `"09:30"` becomes `930`. An interval is open when `open <= now <= close`
//! with both ends inclusive.
//!
//! Intervals that cross midnight (`close < open`, e.g. `12:00`-`01:00`) are
//! not special-cased: the inclusive comparison can never succeed, so such a
//! day always evaluates as closed.

use crate::error::ParseWeekdayError;
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Day of the week, serialized as its lowercase English name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Lowercase English name
    pub fn name(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = ParseWeekdayError;

    /// Parse a full day name or its three-letter abbreviation, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        Self::ALL
            .into_iter()
            .find(|day| {
                let name = day.name();
                name.eq_ignore_ascii_case(input) || name[..3].eq_ignore_ascii_case(input)
            })
            .ok_or_else(|| ParseWeekdayError(s.to_string()))
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// Parse an `HH:MM` string into its HHMM integer by stripping the colon.
///
/// Returns `None` when what remains is not a number.
pub fn parse_hhmm(text: &str) -> Option<u32> {
    let digits: String = text.trim().chars().filter(|c| *c != ':').collect();
    digits.parse().ok()
}

/// Opening interval for a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHours {
    /// Opening time, 24-hour `HH:MM`
    #[serde(default)]
    pub open: String,

    /// Closing time, 24-hour `HH:MM`
    #[serde(default)]
    pub close: String,

    /// Closed all day, regardless of `open`/`close`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub closed: bool,
}

impl DailyHours {
    /// An interval from `open` to `close`.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            closed: false,
        }
    }

    /// A day explicitly marked closed.
    pub fn closed() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
            closed: true,
        }
    }

    /// Whether `hhmm` lies within `[open, close]`.
    ///
    /// Always false for a closed day, for unparseable times, and for
    /// intervals crossing midnight.
    pub fn contains(&self, hhmm: u32) -> bool {
        if self.closed {
            return false;
        }
        match (parse_hhmm(&self.open), parse_hhmm(&self.close)) {
            (Some(open), Some(close)) => open <= hhmm && hhmm <= close,
            _ => false,
        }
    }
}

/// Weekly opening hours. A day with no entry is closed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HoursOfOperation(BTreeMap<Weekday, DailyHours>);

impl HoursOfOperation {
    /// Empty schedule (closed every day)
    pub fn new() -> Self {
        Self::default()
    }

    /// The same interval on every day of the week.
    pub fn every_day(open: &str, close: &str) -> Self {
        Weekday::ALL
            .into_iter()
            .map(|day| (day, DailyHours::new(open, close)))
            .collect()
    }

    /// Set the hours for one day, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, day: Weekday, hours: DailyHours) -> Self {
        self.0.insert(day, hours);
        self
    }

    /// Remove the entry for one day, leaving it closed.
    #[must_use]
    pub fn without(mut self, day: Weekday) -> Self {
        self.0.remove(&day);
        self
    }

    /// Hours for a given day, if the restaurant lists that day.
    pub fn for_day(&self, day: Weekday) -> Option<&DailyHours> {
        self.0.get(&day)
    }

    /// Whether the schedule has the restaurant open at `moment`.
    pub fn is_open_at(&self, moment: Moment) -> bool {
        self.for_day(moment.weekday)
            .is_some_and(|hours| hours.contains(moment.hhmm))
    }

    /// Entries in Monday-to-Sunday order.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &DailyHours)> {
        self.0.iter().map(|(day, hours)| (*day, hours))
    }
}

impl FromIterator<(Weekday, DailyHours)> for HoursOfOperation {
    fn from_iter<I: IntoIterator<Item = (Weekday, DailyHours)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A point in the week at which opening status is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moment {
    /// Day of the week
    pub weekday: Weekday,

    /// Time of day as HHMM
    pub hhmm: u32,
}

impl Moment {
    /// A moment from a weekday, hour and minute.
    ///
    /// Meaningful for `hour < 24` and `minute < 60`. Larger values saturate
    /// instead of overflowing and match no opening interval.
    pub fn new(weekday: Weekday, hour: u32, minute: u32) -> Self {
        Self {
            weekday,
            hhmm: hour.saturating_mul(100).saturating_add(minute),
        }
    }

    /// The weekday and wall-clock time of `datetime` in its own time zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        Self::new(datetime.weekday().into(), datetime.hour(), datetime.minute())
    }

    /// The current moment according to the local clock.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}:{:02}", self.weekday, self.hhmm / 100, self.hhmm % 100)
    }
}
