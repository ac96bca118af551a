// ==========================================
// Stockwatch - Domain Type Definitions
// ==========================================
// Traffic-light risk tiers derived from days-until-stockout
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// StockStatus - Stock Risk Tier
// ==========================================
// Bands are closed on the lower side: exactly 14 days is Low,
// exactly 7 days is Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    Safe,     // more than 14 days of stock
    Low,      // more than 7, up to 14 days
    Critical, // 7 days or fewer
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockStatus::Safe => write!(f, "SAFE"),
            StockStatus::Low => write!(f, "LOW"),
            StockStatus::Critical => write!(f, "CRITICAL"),
        }
    }
}
