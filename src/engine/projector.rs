// ==========================================
// Stockwatch - Stockout Projector
// ==========================================
// Combines current stock, receipts, and sales velocity into a
// remaining-days estimate and a projected stockout date. Zero
// velocity takes an explicit infinite sentinel BEFORE the
// division, so no NaN can ever appear in a result row.
// ==========================================

use crate::domain::types::StockStatus;
use crate::domain::velocity::ProductVelocity;
use crate::engine::classifier;
use crate::engine::velocity::ProductAggregate;
use chrono::{Duration, NaiveDateTime};

pub struct StockoutProjector;

impl StockoutProjector {
    /// Project one aggregate into a full velocity row, evaluated
    /// at the injected `evaluation_time` (never a wall clock).
    pub fn project(aggregate: &ProductAggregate, evaluation_time: NaiveDateTime) -> ProductVelocity {
        let adjusted_stock = aggregate.current_stock + aggregate.total_receipts;

        let days_until_stockout = if aggregate.avg_daily_sales == 0.0 {
            // never stocks out under current velocity
            f64::INFINITY
        } else {
            adjusted_stock / aggregate.avg_daily_sales
        };

        let stockout_date = Self::add_fractional_days(evaluation_time, days_until_stockout);
        let status: StockStatus = classifier::classify_days(days_until_stockout);

        ProductVelocity {
            product: aggregate.product.clone(),
            avg_daily_sales: aggregate.avg_daily_sales,
            total_receipts: aggregate.total_receipts,
            current_stock: aggregate.current_stock,
            adjusted_stock,
            days_until_stockout,
            stockout_date,
            status,
        }
    }

    /// `base + days` with fractional days carried at second
    /// precision; None when days is not finite or the resulting
    /// date is beyond the representable calendar range.
    fn add_fractional_days(base: NaiveDateTime, days: f64) -> Option<NaiveDateTime> {
        if !days.is_finite() {
            return None;
        }
        // the cast saturates for huge day counts; try_seconds then
        // rejects anything outside chrono's duration bounds
        let seconds = (days * 86_400.0).round() as i64;
        Duration::try_seconds(seconds).and_then(|d| base.checked_add_signed(d))
    }
}
