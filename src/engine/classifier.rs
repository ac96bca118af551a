// ==========================================
// Stockwatch - Risk Classifier
// ==========================================
// Pure mapping from days-until-stockout to the traffic-light
// tier. Bands close on the lower side: exactly 14.0 is Low,
// exactly 7.0 is Critical. Infinity is Safe.
// ==========================================

use crate::config::{LOW_THRESHOLD_DAYS, SAFE_THRESHOLD_DAYS};
use crate::domain::types::StockStatus;

/// Classify a remaining-days figure. Callers guarantee the value
/// is never NaN (the projector substitutes the infinite sentinel
/// before dividing).
pub fn classify_days(days_until_stockout: f64) -> StockStatus {
    if days_until_stockout > SAFE_THRESHOLD_DAYS {
        StockStatus::Safe
    } else if days_until_stockout > LOW_THRESHOLD_DAYS {
        StockStatus::Low
    } else {
        StockStatus::Critical
    }
}
