//! Error types for slot-engine operations.

use thiserror::Error;

/// Why a recurrence string was rejected during ingestion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The string does not have the `"<Weekday> HH:MM-HH:MM"` shape.
    #[error("Malformed recurrence string: {0}")]
    Shape(String),

    /// The day token is not one of the seven full English weekday names.
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),
}

/// Errors raised by the helper entry points that accept caller-supplied
/// dates, times, JSON or configuration.
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid time (expected HH:MM): {0}")]
    InvalidTime(String),

    #[error("Invalid horizon: {0}")]
    Horizon(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
