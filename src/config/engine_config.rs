// ==========================================
// Stockwatch - Engine Configuration
// ==========================================
// Policy constants and the validated per-run configuration.
// A bad configuration fails the whole computation up front;
// per-row data problems never do.
// ==========================================

use crate::engine::error::EngineError;
use serde::{Deserialize, Serialize};

// ==========================================
// Policy constants
// ==========================================

/// Stock assumed for every record when no stock column is mapped
/// or a stock cell does not parse.
pub const DEFAULT_CURRENT_STOCK: f64 = 100.0;

/// Receipts assumed when no receipts column is mapped or a
/// receipts cell does not parse ("no movement on ambiguity").
pub const DEFAULT_STOCK_RECEIPTS: f64 = 0.0;

/// Above this many days of remaining stock a product is Safe.
pub const SAFE_THRESHOLD_DAYS: f64 = 14.0;

/// Above this many days (and at or below the safe threshold) a
/// product is Low; at or below it, Critical.
pub const LOW_THRESHOLD_DAYS: f64 = 7.0;

/// Restock suggestions target this many days of inventory.
pub const RESTOCK_HORIZON_DAYS: f64 = 30.0;

/// Minimum suggested restock quantity in units.
pub const RESTOCK_FLOOR_UNITS: f64 = 50.0;

/// Valid bounds for the alert lead time.
pub const MIN_LEAD_TIME_DAYS: i64 = 1;
pub const MAX_LEAD_TIME_DAYS: i64 = 14;

// ==========================================
// EngineConfig - validated per-run configuration
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Days before a projected stockout at which an alert fires.
    pub lead_time_days: i64,
}

impl EngineConfig {
    /// Build a configuration, rejecting lead times outside [1, 14].
    pub fn new(lead_time_days: i64) -> Result<Self, EngineError> {
        if !(MIN_LEAD_TIME_DAYS..=MAX_LEAD_TIME_DAYS).contains(&lead_time_days) {
            return Err(EngineError::InvalidLeadTime {
                value: lead_time_days,
                min: MIN_LEAD_TIME_DAYS,
                max: MAX_LEAD_TIME_DAYS,
            });
        }
        Ok(Self { lead_time_days })
    }

    /// Re-check bounds on a deserialized configuration.
    pub fn validate(&self) -> Result<(), EngineError> {
        Self::new(self.lead_time_days).map(|_| ())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { lead_time_days: 7 }
    }
}
