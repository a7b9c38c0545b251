//! Slot generation: expands weekly windows into concrete hourly slots.
//!
//! For each day of the horizon, starting at the anchor day, the weekday's
//! window (if any) yields one slot per whole hour in `[start.hour, end.hour)`.
//! Output is ordered by date, then hour.

use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::rule::weekday_name;
use crate::weekly::WeeklyAvailability;

/// Horizon used by the booking dialog when the caller does not pick one.
pub const DEFAULT_HORIZON_DAYS: u32 = 14;

/// One bookable hour on a concrete calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    /// Local date and hour of the slot; minutes and seconds are always zero.
    pub instant: NaiveDateTime,
    /// `HH:MM` label, e.g. `"09:00"`.
    pub time_of_day: String,
    /// Full weekday name, e.g. `"Monday"`.
    pub day_of_week: String,
    /// e.g. `"9:00 AM"`.
    pub display_time: String,
    /// e.g. `"Mon, Feb 5"`.
    pub display_date: String,
}

impl AvailabilitySlot {
    /// Build the slot for `hour` on `date`. `None` if `hour` is not a valid
    /// time of day.
    pub fn at(date: NaiveDate, hour: u32) -> Option<Self> {
        let time = NaiveTime::from_hms_opt(hour, 0, 0)?;
        let instant = date.and_time(time);
        Some(Self {
            instant,
            time_of_day: instant.format("%H:%M").to_string(),
            day_of_week: weekday_name(date.weekday()).to_string(),
            display_time: instant.format("%-I:%M %p").to_string(),
            display_date: instant.format("%a, %b %-d").to_string(),
        })
    }

    /// Calendar date of the slot.
    pub fn date(&self) -> NaiveDate {
        self.instant.date()
    }

    /// `YYYY-MM-DD` key used for grouping.
    pub fn date_key(&self) -> String {
        self.instant.format("%Y-%m-%d").to_string()
    }
}

/// Parameters for one generation run.
///
/// [`generate_available_slots`] covers the common case; the query exists for
/// callers that need to pin the anchor day or drop slots that have already
/// started.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotQuery {
    anchor: NaiveDate,
    horizon_days: u32,
    not_before: Option<NaiveDateTime>,
}

impl SlotQuery {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            horizon_days: DEFAULT_HORIZON_DAYS,
            not_before: None,
        }
    }

    /// Query anchored at today's local date.
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn horizon_days(mut self, days: u32) -> Self {
        self.horizon_days = days;
        self
    }

    /// Drop slots whose `instant` is earlier than `cutoff`.
    pub fn not_before(mut self, cutoff: NaiveDateTime) -> Self {
        self.not_before = Some(cutoff);
        self
    }

    pub fn run(&self, availability: &WeeklyAvailability) -> Vec<AvailabilitySlot> {
        let mut slots = generate_slots_from(self.anchor, availability, self.horizon_days);
        if let Some(cutoff) = self.not_before {
            slots.retain(|slot| slot.instant >= cutoff);
        }
        slots
    }
}

/// Generate slots for `horizon_days` days starting at `anchor` (offset 0).
///
/// Deterministic: the same anchor and availability always give the same list.
/// A horizon that would run past the end of the calendar is cut short there.
pub fn generate_slots_from(
    anchor: NaiveDate,
    availability: &WeeklyAvailability,
    horizon_days: u32,
) -> Vec<AvailabilitySlot> {
    if availability.is_empty() {
        return Vec::new();
    }

    let mut slots = Vec::new();
    for offset in 0..u64::from(horizon_days) {
        let Some(date) = anchor.checked_add_days(Days::new(offset)) else {
            break;
        };
        let Some(rule) = availability.window(date.weekday()) else {
            continue;
        };
        slots.extend(rule.hours().filter_map(|hour| AvailabilitySlot::at(date, hour)));
    }

    slots
}

/// Generate slots from raw recurrence strings, anchored at today's local date.
///
/// Unparseable entries and unknown weekdays are skipped; a weekday listed more
/// than once uses its last entry. Empty input gives an empty list.
pub fn generate_available_slots<S: AsRef<str>>(
    recurrence_strings: &[S],
    horizon_days: u32,
) -> Vec<AvailabilitySlot> {
    if recurrence_strings.is_empty() {
        return Vec::new();
    }
    let availability = WeeklyAvailability::parse(recurrence_strings);
    SlotQuery::today()
        .horizon_days(horizon_days)
        .run(&availability)
}
