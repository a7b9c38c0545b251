//! WASM bindings for slot-engine.
//!
//! Exposes slot generation, date grouping and the custom-request check to the
//! booking dialog via `wasm-bindgen`. Rule lists and slot lists cross the
//! boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::error::Result as EngineResult;
use slot_engine::{AvailabilitySlot, SlotQuery, WeeklyAvailability};
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ParseReportDto<'a> {
    rules: Vec<&'a slot_engine::RecurrenceRule>,
    skipped: &'a [slot_engine::SkippedEntry],
}

/// Decode a JSON array of recurrence strings.
fn parse_rules_json(json: &str) -> EngineResult<Vec<String>> {
    Ok(serde_json::from_str(json)?)
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// Plain-Rust implementations (tested natively)
// ---------------------------------------------------------------------------

fn generate_json(rules_json: &str, query: SlotQuery) -> EngineResult<String> {
    let rules = parse_rules_json(rules_json)?;
    let slots = query.run(&WeeklyAvailability::parse(&rules));
    Ok(serde_json::to_string(&slots)?)
}

fn generate_from_json(
    rules_json: &str,
    anchor_date: &str,
    horizon_days: u32,
) -> EngineResult<String> {
    let anchor = slot_engine::parse_date_key(anchor_date)?;
    generate_json(rules_json, SlotQuery::new(anchor).horizon_days(horizon_days))
}

fn group_json(slots_json: &str) -> EngineResult<String> {
    let slots: Vec<AvailabilitySlot> = serde_json::from_str(slots_json)?;
    Ok(serde_json::to_string(&slot_engine::group_slots_by_date(&slots))?)
}

fn is_available_json(date: &str, time: &str, rules_json: &str) -> EngineResult<bool> {
    let date = slot_engine::parse_date_key(date)?;
    let rules = parse_rules_json(rules_json)?;
    Ok(slot_engine::is_time_available(date, time, &rules))
}

fn parse_report_json(rules_json: &str) -> EngineResult<String> {
    let rules = parse_rules_json(rules_json)?;
    let table = WeeklyAvailability::parse(&rules);
    let report = ParseReportDto {
        rules: table.rules().collect(),
        skipped: table.skipped(),
    };
    Ok(serde_json::to_string(&report)?)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate bookable slots anchored at today's local date.
///
/// `rules_json` is a JSON array of recurrence strings such as
/// `["Monday 09:00-17:00"]`. Returns a JSON array of slot objects
/// (`instant`, `time_of_day`, `day_of_week`, `display_time`, `display_date`).
#[wasm_bindgen(js_name = "generateAvailableSlots")]
pub fn generate_available_slots(rules_json: &str, horizon_days: u32) -> Result<String, JsValue> {
    generate_json(rules_json, SlotQuery::today().horizon_days(horizon_days)).map_err(to_js)
}

/// Generate bookable slots starting at `anchor_date` (`YYYY-MM-DD`).
#[wasm_bindgen(js_name = "generateSlotsFrom")]
pub fn generate_slots_from(
    rules_json: &str,
    anchor_date: &str,
    horizon_days: u32,
) -> Result<String, JsValue> {
    generate_from_json(rules_json, anchor_date, horizon_days).map_err(to_js)
}

/// Group a JSON slot array into a JSON object keyed by `YYYY-MM-DD`.
///
/// Keys appear in first-seen order; sort them for chronological display.
#[wasm_bindgen(js_name = "groupSlotsByDate")]
pub fn group_slots_by_date(slots_json: &str) -> Result<String, JsValue> {
    group_json(slots_json).map_err(to_js)
}

/// Whether a custom request (`YYYY-MM-DD`, `HH:MM`) falls inside availability.
#[wasm_bindgen(js_name = "isTimeAvailable")]
pub fn is_time_available(date: &str, time: &str, rules_json: &str) -> Result<bool, JsValue> {
    is_available_json(date, time, rules_json).map_err(to_js)
}

/// Report which recurrence strings were accepted and which were skipped.
#[wasm_bindgen(js_name = "parseAvailability")]
pub fn parse_availability(rules_json: &str) -> Result<String, JsValue> {
    parse_report_json(rules_json).map_err(to_js)
}
