//! # slot-engine
//!
//! Turns a tutor's weekly availability into bookable hourly slots.
//!
//! Availability arrives as compact recurrence strings such as
//! `"Monday 09:00-17:00"`. The engine parses them, expands each weekday window
//! into one slot per whole hour across a rolling horizon, groups the slots by
//! calendar date for display, and checks ad-hoc booking requests against the
//! same strings. Malformed entries are skipped, never fatal.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use slot_engine::{generate_slots_from, group_slots_by_date, WeeklyAvailability};
//!
//! let availability = WeeklyAvailability::parse(&["Monday 09:00-12:00"]);
//! let sunday = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
//! let slots = generate_slots_from(sunday, &availability, 14);
//!
//! assert_eq!(slots[0].time_of_day, "09:00");
//! assert_eq!(slots[0].day_of_week, "Monday");
//! assert_eq!(group_slots_by_date(&slots).get("2026-03-16").unwrap().len(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`rule`]: one recurrence string → [`RecurrenceRule`]
//! - [`weekly`]: batch ingestion into a weekday table, with skipped entries
//! - [`generator`]: weekday table + horizon → ordered slots
//! - [`grouper`]: date buckets and the custom-request check
//! - [`config`]: horizon and display settings
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod generator;
pub mod grouper;
pub mod rule;
pub mod weekly;

pub use config::EngineConfig;
pub use error::{RuleError, SlotError};
pub use generator::{
    generate_available_slots, generate_slots_from, AvailabilitySlot, SlotQuery,
    DEFAULT_HORIZON_DAYS,
};
pub use grouper::{
    group_slots_by_date, is_time_available, parse_date_key, parse_request_time, SlotGroups,
};
pub use rule::{parse_recurrence_string, ClockTime, RecurrenceRule};
pub use weekly::{SkippedEntry, WeeklyAvailability};
