//! In-memory configuration store for the tracker.
//!
//! Holds the two user-editable parameters the tick rule consumes. The store
//! lives for the process lifetime and is never written to disk.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WattmonError};

/// Default simulated device draw, in watts per minute.
pub const DEFAULT_WATT_RATE_PER_MINUTE: f64 = 1.0;

/// Default price charged per accumulated watt-hour.
pub const DEFAULT_PRICE_PER_WATT_HOUR: f64 = 0.1;

/// User-editable tracking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Simulated device power draw, minutes-normalized
    pub watt_rate_per_minute: f64,
    /// Cost coefficient multiplied against accumulated consumption
    pub price_per_watt_hour: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            watt_rate_per_minute: DEFAULT_WATT_RATE_PER_MINUTE,
            price_per_watt_hour: DEFAULT_PRICE_PER_WATT_HOUR,
        }
    }
}

impl TrackerConfig {
    pub fn new(watt_rate_per_minute: f64, price_per_watt_hour: f64) -> Self {
        Self {
            watt_rate_per_minute,
            price_per_watt_hour,
        }
    }

    /// Current `(watt_rate_per_minute, price_per_watt_hour)` pair. Never fails.
    pub fn get(&self) -> (f64, f64) {
        (self.watt_rate_per_minute, self.price_per_watt_hour)
    }

    /// Parse both raw text fields and replace the stored values atomically.
    ///
    /// Both fields are parsed before either value is written, so a failure
    /// in the second field leaves the first untouched. On any parse failure
    /// the prior configuration is preserved and the caller gets
    /// `InvalidNumericInput` to surface to the user.
    pub fn save(&mut self, watt_text: &str, price_text: &str) -> Result<()> {
        let watt_rate = parse_numeric_field("watt rate", watt_text)?;
        let price = parse_numeric_field("price", price_text)?;

        self.watt_rate_per_minute = watt_rate;
        self.price_per_watt_hour = price;

        Ok(())
    }
}

/// Parse a single numeric text field.
///
/// Surrounding whitespace is ignored. Non-finite values (NaN, infinities)
/// are rejected: the tick rule multiplies and accumulates these parameters,
/// and a single non-finite value would poison every reading after it.
fn parse_numeric_field(label: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();

    let value: f64 = trimmed.parse().map_err(|_| {
        WattmonError::invalid_numeric_input(format!(
            "{} must be a numeric value, got '{}'",
            label, trimmed
        ))
    })?;

    if !value.is_finite() {
        return Err(WattmonError::invalid_numeric_input(format!(
            "{} must be a finite number, got '{}'",
            label, trimmed
        )));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.watt_rate_per_minute, 1.0);
        assert_eq!(config.price_per_watt_hour, 0.1);
    }

    #[test]
    fn test_save_valid_input() {
        let mut config = TrackerConfig::default();
        config.save("2.5", "0.2").unwrap();
        assert_eq!(config.get(), (2.5, 0.2));
    }

    #[test]
    fn test_save_trims_whitespace() {
        let mut config = TrackerConfig::default();
        config.save("  3.0 ", "\t0.05\n").unwrap();
        assert_eq!(config.get(), (3.0, 0.05));
    }

    #[test]
    fn test_save_invalid_watt_text_preserves_config() {
        let mut config = TrackerConfig::default();
        let err = config.save("abc", "0.2").unwrap_err();
        assert!(matches!(err, WattmonError::InvalidNumericInput(_)));
        assert_eq!(config.get(), (1.0, 0.1));
    }

    #[test]
    fn test_save_invalid_price_text_preserves_config() {
        let mut config = TrackerConfig::new(2.0, 0.3);
        let err = config.save("4.0", "not a price").unwrap_err();
        assert!(matches!(err, WattmonError::InvalidNumericInput(_)));
        assert_eq!(config.get(), (2.0, 0.3));
    }

    #[test]
    fn test_save_rejects_non_finite_values() {
        let mut config = TrackerConfig::default();
        assert!(config.save("NaN", "0.2").is_err());
        assert!(config.save("1.0", "inf").is_err());
        assert_eq!(config.get(), (1.0, 0.1));
    }

    #[test]
    fn test_save_accepts_negative_values() {
        // Non-negativity is not enforced; the editor accepts any finite number.
        let mut config = TrackerConfig::default();
        config.save("-1.0", "-0.1").unwrap();
        assert_eq!(config.get(), (-1.0, -0.1));
    }
}
