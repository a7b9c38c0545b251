//! Tests for slot generation over a fixed anchor day.

use chrono::{Datelike, NaiveDate, Timelike, Weekday};
use slot_engine::{
    generate_available_slots, generate_slots_from, AvailabilitySlot, SlotQuery,
    WeeklyAvailability, DEFAULT_HORIZON_DAYS,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

/// Sunday 2026-03-15.
fn sunday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

fn generate(rules: &[&str], horizon_days: u32) -> Vec<AvailabilitySlot> {
    generate_slots_from(sunday(), &WeeklyAvailability::parse(rules), horizon_days)
}

fn hours_on(slots: &[AvailabilitySlot], weekday: Weekday) -> Vec<u32> {
    slots
        .iter()
        .filter(|s| s.instant.weekday() == weekday)
        .map(|s| s.instant.hour())
        .collect()
}

// ── End-to-end scenario ─────────────────────────────────────────────────────

#[test]
fn monday_morning_from_sunday_anchor() {
    let slots = generate(&["Monday 09:00-12:00"], 14);

    let first = &slots[0];
    assert_eq!(first.date(), NaiveDate::from_ymd_opt(2026, 3, 16).unwrap());
    assert_eq!(first.time_of_day, "09:00");
    assert_eq!(first.day_of_week, "Monday");
    assert_eq!(first.display_date, "Mon, Mar 16");
    assert_eq!(first.display_time, "9:00 AM");

    let first_day: Vec<&str> = slots
        .iter()
        .filter(|s| s.date() == first.date())
        .map(|s| s.time_of_day.as_str())
        .collect();
    assert_eq!(first_day, ["09:00", "10:00", "11:00"]);

    // Two Mondays in a 14-day horizon starting on a Sunday.
    assert_eq!(slots.len(), 6);
    assert_eq!(slots[3].date(), NaiveDate::from_ymd_opt(2026, 3, 23).unwrap());
}

// ── Range semantics ─────────────────────────────────────────────────────────

#[test]
fn end_hour_is_exclusive() {
    let slots = generate(&["Monday 09:00-17:00"], 7);
    assert_eq!(slots.len(), 8);
    assert_eq!(hours_on(&slots, Weekday::Mon), (9..17u32).collect::<Vec<_>>());
    assert!(slots.iter().all(|s| s.time_of_day != "17:00"));
}

#[test]
fn zero_width_range_has_no_slots() {
    assert!(generate(&["Tuesday 14:00-14:00"], 14).is_empty());
}

#[test]
fn inverted_range_has_no_slots() {
    assert!(generate(&["Tuesday 18:00-09:00"], 14).is_empty());
}

#[test]
fn minutes_are_ignored_at_slot_boundaries() {
    // Known limitation: only the hour component drives slot positions.
    let slots = generate(&["Wednesday 09:30-12:45"], 7);
    let labels: Vec<&str> = slots.iter().map(|s| s.time_of_day.as_str()).collect();
    assert_eq!(labels, ["09:00", "10:00", "11:00"]);
    assert!(slots.iter().all(|s| s.instant.minute() == 0));
}

#[test]
fn window_to_midnight_ends_at_eleven_pm() {
    let slots = generate(&["Sunday 22:00-24:00"], 1);
    let labels: Vec<&str> = slots.iter().map(|s| s.time_of_day.as_str()).collect();
    assert_eq!(labels, ["22:00", "23:00"]);
}

// ── Input policy ────────────────────────────────────────────────────────────

#[test]
fn empty_input_gives_empty_list() {
    assert!(generate(&[], 14).is_empty());
    assert!(generate_available_slots::<&str>(&[], DEFAULT_HORIZON_DAYS).is_empty());
}

#[test]
fn garbage_entry_does_not_blank_the_calendar() {
    let slots = generate(&["Notaday 09:00-10:00", "Wednesday 09:00-10:00"], 14);
    assert_eq!(slots.len(), 2);
    assert!(slots.iter().all(|s| s.day_of_week == "Wednesday"));
}

#[test]
fn malformed_entry_is_skipped() {
    let slots = generate(&["Thursday 9:00-10:00", "Friday 10:00-11:00"], 7);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].day_of_week, "Friday");
}

#[test]
fn last_entry_wins_for_duplicate_weekday() {
    let slots = generate(&["Friday 09:00-11:00", "Friday 14:00-16:00"], 14);
    assert_eq!(hours_on(&slots, Weekday::Fri), [14, 15, 14, 15]);
}

#[test]
fn out_of_range_later_entry_still_wins() {
    let slots = generate(&["Friday 09:00-11:00", "Friday 14:00-99:00"], 7);
    assert_eq!(hours_on(&slots, Weekday::Fri), (14..24u32).collect::<Vec<_>>());
}

#[test]
fn end_hour_past_midnight_is_capped() {
    let slots = generate(&["Monday 22:00-25:00"], 7);
    let labels: Vec<&str> = slots.iter().map(|s| s.time_of_day.as_str()).collect();
    assert_eq!(labels, ["22:00", "23:00"]);
}

#[test]
fn zero_horizon_gives_no_slots() {
    assert!(generate(&["Sunday 09:00-10:00"], 0).is_empty());
}

#[test]
fn anchor_day_is_offset_zero() {
    let slots = generate(&["Sunday 09:00-10:00"], 1);
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].date(), sunday());
}

#[test]
fn horizon_excludes_day_at_offset_n() {
    // Offsets 0..7 cover Sunday through Saturday; the next Sunday is excluded.
    let slots = generate(&["Sunday 09:00-10:00"], 7);
    assert_eq!(slots.len(), 1);
    let slots = generate(&["Sunday 09:00-10:00"], 8);
    assert_eq!(slots.len(), 2);
}

// ── Ordering and determinism ────────────────────────────────────────────────

#[test]
fn output_is_ordered_by_date_then_hour() {
    // Input order deliberately not chronological.
    let slots = generate(
        &["Saturday 13:00-15:00", "Monday 09:00-11:00", "Thursday 08:00-10:00"],
        21,
    );
    assert!(!slots.is_empty());
    for pair in slots.windows(2) {
        assert!(pair[0].instant < pair[1].instant);
    }
}

#[test]
fn generation_is_idempotent() {
    let rules = ["Monday 09:00-12:00", "Friday 13:00-17:00"];
    assert_eq!(generate(&rules, 14), generate(&rules, 14));
}

// ── SlotQuery ───────────────────────────────────────────────────────────────

#[test]
fn query_defaults_match_generate_slots_from() {
    let availability = WeeklyAvailability::parse(&["Monday 09:00-12:00"]);
    assert_eq!(
        SlotQuery::new(sunday()).run(&availability),
        generate_slots_from(sunday(), &availability, DEFAULT_HORIZON_DAYS)
    );
}

#[test]
fn query_not_before_drops_started_slots() {
    let availability = WeeklyAvailability::parse(&["Sunday 09:00-13:00"]);
    let cutoff = sunday().and_hms_opt(10, 30, 0).unwrap();
    let slots = SlotQuery::new(sunday())
        .horizon_days(1)
        .not_before(cutoff)
        .run(&availability);
    let labels: Vec<&str> = slots.iter().map(|s| s.time_of_day.as_str()).collect();
    assert_eq!(labels, ["11:00", "12:00"]);
}

// ── Clock-anchored entry point ──────────────────────────────────────────────

#[test]
fn clock_anchored_generation_covers_every_weekday_once_per_week() {
    let rules = [
        "Monday 09:00-10:00",
        "Tuesday 09:00-10:00",
        "Wednesday 09:00-10:00",
        "Thursday 09:00-10:00",
        "Friday 09:00-10:00",
        "Saturday 09:00-10:00",
        "Sunday 09:00-10:00",
    ];
    let slots = generate_available_slots(&rules, 14);
    assert_eq!(slots.len(), 14);
    for pair in slots.windows(2) {
        assert_eq!((pair[1].date() - pair[0].date()).num_days(), 1);
    }
}
