//! Engine configuration: horizon, display limit and a default availability list.
//!
//! ```json
//! { "horizon_days": 14, "display_days": 7, "availability": ["Monday 09:00-12:00"] }
//! ```
//!
//! Every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::generator::DEFAULT_HORIZON_DAYS;

/// Number of dates with availability the booking dialog shows.
pub const DEFAULT_DISPLAY_DAYS: usize = 7;

/// Longest horizon a configuration may ask for.
pub const MAX_HORIZON_DAYS: u32 = 366;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub horizon_days: u32,
    pub display_days: usize,
    pub availability: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            display_days: DEFAULT_DISPLAY_DAYS,
            availability: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check `horizon_days` is in `1..=MAX_HORIZON_DAYS`.
    pub fn validate(&self) -> Result<()> {
        validate_horizon(self.horizon_days)
    }
}

pub fn validate_horizon(days: u32) -> Result<()> {
    if days == 0 || days > MAX_HORIZON_DAYS {
        return Err(SlotError::Horizon(format!(
            "{} days (must be between 1 and {})",
            days, MAX_HORIZON_DAYS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.horizon_days, 14);
        assert_eq!(config.display_days, 7);
    }

    #[test]
    fn zero_horizon_is_rejected() {
        let err = EngineConfig::from_json_str(r#"{"horizon_days":0}"#).unwrap_err();
        assert!(matches!(err, SlotError::Horizon(_)));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = EngineConfig::from_json_str(r#"{"horizon":3}"#).unwrap_err();
        assert!(matches!(err, SlotError::Json(_)));
    }
}
