//! Weekday-indexed availability table built from a batch of recurrence strings.
//!
//! Ingestion never fails as a whole: entries that do not parse, or whose day
//! token is not a weekday name, are recorded in [`WeeklyAvailability::skipped`]
//! and left out of the table. When two entries name the same weekday the later
//! one replaces the earlier (last-write-wins), so each weekday holds at most one
//! contiguous window.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use tracing::debug;

use crate::error::RuleError;
use crate::rule::{ClockTime, RecurrenceRule};

/// A recurrence string that was left out of the table, and why.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedEntry {
    /// Position of the entry in the input slice.
    pub index: usize,
    pub input: String,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: RuleError,
}

fn serialize_reason<S: serde::Serializer>(reason: &RuleError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(reason)
}

/// At most one availability window per weekday.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyAvailability {
    windows: [Option<RecurrenceRule>; 7],
    skipped: Vec<SkippedEntry>,
}

impl WeeklyAvailability {
    /// Ingest raw recurrence strings in order.
    pub fn parse<S: AsRef<str>>(recurrence_strings: &[S]) -> Self {
        let mut table = Self::default();

        for (index, raw) in recurrence_strings.iter().enumerate() {
            let raw = raw.as_ref();
            let parsed = raw
                .parse::<RecurrenceRule>()
                .and_then(|rule| match rule.weekday() {
                    Some(day) => Ok((day, rule)),
                    None => Err(RuleError::UnknownWeekday(rule.day)),
                });
            match parsed {
                Ok((day, rule)) => table.insert(day, rule),
                Err(reason) => {
                    debug!(index, input = raw, %reason, "skipping availability entry");
                    table.skipped.push(SkippedEntry {
                        index,
                        input: raw.to_string(),
                        reason,
                    });
                }
            }
        }

        table
    }

    fn insert(&mut self, day: Weekday, rule: RecurrenceRule) {
        let slot = &mut self.windows[day.num_days_from_monday() as usize];
        if let Some(previous) = slot.as_ref() {
            debug!(%previous, replacement = %rule, "duplicate weekday, later entry wins");
        }
        *slot = Some(rule);
    }

    /// The window configured for `day`, if any.
    pub fn window(&self, day: Weekday) -> Option<&RecurrenceRule> {
        self.windows[day.num_days_from_monday() as usize].as_ref()
    }

    /// Accepted rules, Monday first.
    pub fn rules(&self) -> impl Iterator<Item = &RecurrenceRule> {
        self.windows.iter().flatten()
    }

    /// Entries that were left out during ingestion, in input order.
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    /// True when no weekday has a window.
    pub fn is_empty(&self) -> bool {
        self.windows.iter().all(Option::is_none)
    }

    /// Whether `time`'s hour on `date` falls inside the window for that
    /// weekday, resolving duplicate weekdays the same way the slot generator
    /// does.
    ///
    /// [`crate::grouper::is_time_available`] scans the raw strings with
    /// first-match semantics instead; the two disagree only when a weekday is
    /// listed more than once.
    pub fn covers(&self, date: NaiveDate, time: ClockTime) -> bool {
        self.window(date.weekday())
            .is_some_and(|rule| rule.contains_hour(time.hour()))
    }
}
