// ==========================================
// Stockwatch - Forecast Result Domain Models
// ==========================================
// Per-product velocity/projection rows, the simulated alert
// schedule, and restock suggestions. All rows are recomputed in
// full on every run; nothing here is updated incrementally.
// ==========================================

use crate::domain::types::StockStatus;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// ==========================================
// ProductVelocity - one row per distinct product
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVelocity {
    pub product: String,

    // ===== Velocity aggregates =====
    pub avg_daily_sales: f64,      // mean of per-day summed quantities
    pub total_receipts: f64,       // sum of all receipt movements
    pub current_stock: f64,        // last observed stock, input order

    // ===== Projection =====
    pub adjusted_stock: f64,       // current_stock + total_receipts
    pub days_until_stockout: f64,  // f64::INFINITY when velocity is 0
    /// None when the product never stocks out under current
    /// velocity or the projected date exceeds the calendar range.
    pub stockout_date: Option<NaiveDateTime>,

    // ===== Classification =====
    pub status: StockStatus,
}

impl ProductVelocity {
    /// A product with zero velocity never stocks out under the
    /// current sales rate.
    pub fn never_stocks_out(&self) -> bool {
        self.days_until_stockout.is_infinite()
    }
}

// ==========================================
// AlertEntry - one simulated alert per product
// ==========================================
// Dates are calendar dates (the schedule is day-granular); None
// means no alert will ever fire under current velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEntry {
    pub product: String,
    pub adjusted_stock: i64,          // truncated for display
    pub avg_daily_sales: f64,         // rounded to 2 decimal places
    pub stockout_date: Option<NaiveDate>,
    pub alert_date: Option<NaiveDate>, // clamped to evaluation date
}

// ==========================================
// RestockSuggestion - under-threshold products
// ==========================================
// Suggested quantity targets a 30-day horizon with a floor of
// 50 units; both are policy constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockSuggestion {
    pub product: String,
    pub days_until_stockout: f64,
    pub total_receipts: f64,
    pub suggested_quantity: f64,
}
