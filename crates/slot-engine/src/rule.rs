//! Recurrence string parsing: `"<Weekday> HH:MM-HH:MM"` into a typed rule.
//!
//! The parser only enforces the wire shape. The day token is kept verbatim and
//! resolved against the seven English weekday names later, so a misspelled day
//! parses fine and simply never matches a calendar date.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// Full weekday names in the case-sensitive form the availability strings use,
/// indexed by `Weekday::num_days_from_monday()`.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// The full English name of `day` (`Weekday::Mon` → `"Monday"`).
pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// Resolve a full, case-sensitive weekday name. `"monday"` and `"Mon"` do not match.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    WEEKDAY_NAMES
        .iter()
        .position(|n| *n == name)
        .map(|idx| WEEKDAYS[idx])
}

/// A two-digit `HH:MM` time as written in a recurrence string.
///
/// Ingestion checks only the shape, so fields run `00`-`99`.
/// [`ClockTime::is_time_of_day`] tells whether the value is a real time of day
/// (`00:00` to `24:00`); slot expansion clamps hours past `24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ClockTime {
    hour: u8,
    minute: u8,
}

impl ClockTime {
    /// Build a time from two-digit fields. `None` if either exceeds `99`.
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 100 && minute < 100).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Whether this is a time of day between `00:00` and `24:00` inclusive.
    pub fn is_time_of_day(&self) -> bool {
        self.minute < 60 && (self.hour < 24 || (self.hour == 24 && self.minute == 0))
    }

    /// Parse exactly `HH:MM`: two digits, a colon, two digits.
    pub fn parse_hhmm(s: &str) -> Result<Self, RuleError> {
        let bytes = s.as_bytes();
        let shaped = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !shaped {
            return Err(RuleError::Shape(s.to_string()));
        }

        Ok(Self {
            hour: (bytes[0] - b'0') * 10 + (bytes[1] - b'0'),
            minute: (bytes[3] - b'0') * 10 + (bytes[4] - b'0'),
        })
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for ClockTime {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hhmm(s)
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl TryFrom<String> for ClockTime {
    type Error = RuleError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse_hhmm(&s)
    }
}

/// One weekly availability window, as written in a tutor profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    /// The day token exactly as it appeared in the input.
    pub day: String,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl RecurrenceRule {
    /// The weekday this rule applies to, or `None` for an unrecognised token.
    pub fn weekday(&self) -> Option<Weekday> {
        weekday_from_name(&self.day)
    }

    /// Hours `h` with `start.hour <= h < end.hour`, capped at `24`. Empty for
    /// inverted or zero-width ranges. Minutes on either bound are ignored.
    pub fn hours(&self) -> std::ops::Range<u32> {
        let start = self.start.hour().min(24);
        let end = self.end.hour().min(24);
        start..end.max(start)
    }

    /// Whether `hour` falls inside the half-open hour range of this rule.
    pub fn contains_hour(&self, hour: u32) -> bool {
        self.hours().contains(&hour)
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

impl FromStr for RecurrenceRule {
    type Err = RuleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let shape_err = || RuleError::Shape(input.to_string());

        // Guards the byte-offset slicing below.
        if !input.is_ascii() {
            return Err(shape_err());
        }

        let (day, range) = input.split_once(' ').ok_or_else(shape_err)?;
        let word = !day.is_empty()
            && day
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_');
        if !word || range.len() != 11 || range.as_bytes()[5] != b'-' {
            return Err(shape_err());
        }

        let start = ClockTime::parse_hhmm(&range[..5])?;
        let end = ClockTime::parse_hhmm(&range[6..])?;

        Ok(Self {
            day: day.to_string(),
            start,
            end,
        })
    }
}

/// Parse one recurrence string, returning `None` for anything that is not
/// exactly `"<Word> HH:MM-HH:MM"`.
///
/// The weekday is not validated here; see [`RecurrenceRule::weekday`].
pub fn parse_recurrence_string(input: &str) -> Option<RecurrenceRule> {
    input.parse().ok()
}
