//! Calendar grouping of slots and the custom-request availability check.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{Result, SlotError};
use crate::generator::AvailabilitySlot;
use crate::rule::{weekday_name, ClockTime, RecurrenceRule};

/// Slots bucketed by `YYYY-MM-DD`.
///
/// Keys are kept in the order they first appear in the input and are not
/// sorted; use [`SlotGroups::sorted_keys`] for chronological display. Within a
/// bucket, slots keep their input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotGroups {
    buckets: Vec<(String, Vec<AvailabilitySlot>)>,
    index: HashMap<String, usize>,
}

impl SlotGroups {
    pub fn get(&self, date_key: &str) -> Option<&[AvailabilitySlot]> {
        self.index
            .get(date_key)
            .map(|&i| self.buckets[i].1.as_slice())
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(|(key, _)| key.as_str())
    }

    /// Keys in chronological order. `YYYY-MM-DD` sorts lexically by date.
    pub fn sorted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.keys().collect();
        keys.sort_unstable();
        keys
    }

    /// The first `n` dates, chronologically, with their slots. Every bucket
    /// holds at least one slot, so these are the first `n` dates with
    /// availability.
    pub fn first_dates(&self, n: usize) -> Vec<(&str, &[AvailabilitySlot])> {
        self.sorted_keys()
            .into_iter()
            .take(n)
            .filter_map(|key| self.get(key).map(|slots| (key, slots)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[AvailabilitySlot])> {
        self.buckets
            .iter()
            .map(|(key, slots)| (key.as_str(), slots.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl Serialize for SlotGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.buckets.len()))?;
        for (key, slots) in &self.buckets {
            map.serialize_entry(key, slots)?;
        }
        map.end()
    }
}

/// Bucket `slots` by the `YYYY-MM-DD` date of each slot's `instant`.
pub fn group_slots_by_date(slots: &[AvailabilitySlot]) -> SlotGroups {
    let mut groups = SlotGroups::default();
    for slot in slots {
        let key = slot.date_key();
        let i = match groups.index.get(&key) {
            Some(&i) => i,
            None => {
                groups.buckets.push((key.clone(), Vec::new()));
                groups.index.insert(key, groups.buckets.len() - 1);
                groups.buckets.len() - 1
            }
        };
        groups.buckets[i].1.push(slot.clone());
    }
    groups
}

/// Parse a `YYYY-MM-DD` date key, the inverse of [`AvailabilitySlot::date_key`].
pub fn parse_date_key(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| SlotError::InvalidDate(s.to_string()))
}

/// Parse a custom-request time of day (`HH:MM`, `00:00` to `24:00`).
pub fn parse_request_time(s: &str) -> Result<ClockTime> {
    ClockTime::parse_hhmm(s)
        .ok()
        .filter(ClockTime::is_time_of_day)
        .ok_or_else(|| SlotError::InvalidTime(s.to_string()))
}

/// Whether a custom request for `time` (`HH:MM`) on `date` falls inside the
/// tutor's availability.
///
/// Scans `recurrence_strings` in order for the first entry whose day token is
/// `date`'s weekday name, then returns whether `time`'s hour is in
/// `[start.hour, end.hour)` of that entry. If that entry does not parse the
/// answer is `false`; later entries for the same day are not consulted.
///
/// `time` must be zero-padded `HH:MM`: `"9:00"` is rejected and never
/// available, matching the recurrence string format.
///
/// This is first-match, unlike the slot generator, which lets the last entry
/// for a weekday win. Use [`crate::WeeklyAvailability::covers`] for the
/// generator's policy.
pub fn is_time_available<S: AsRef<str>>(
    date: NaiveDate,
    time: &str,
    recurrence_strings: &[S],
) -> bool {
    let Ok(time) = ClockTime::parse_hhmm(time) else {
        return false;
    };
    let day_name = weekday_name(date.weekday());

    recurrence_strings
        .iter()
        .map(|raw| raw.as_ref())
        .find(|raw| raw.split(' ').next() == Some(day_name))
        .and_then(|raw| raw.parse::<RecurrenceRule>().ok())
        .is_some_and(|rule| rule.contains_hour(time.hour()))
}
