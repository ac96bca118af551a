// ==========================================
// Stockwatch - Alert Scheduler
// ==========================================
// Selects the products needing an alert right now, simulates the
// forward alert calendar for every product, and derives restock
// suggestions for under-threshold products. Sending is the
// caller's job; the caller also owns the notification history.
// ==========================================

use crate::config::{EngineConfig, RESTOCK_FLOOR_UNITS, RESTOCK_HORIZON_DAYS, SAFE_THRESHOLD_DAYS};
use crate::domain::velocity::{AlertEntry, ProductVelocity, RestockSuggestion};
use chrono::{Duration, NaiveDateTime};
use tracing::info;

pub struct AlertScheduler;

impl AlertScheduler {
    /// Products whose remaining days are at or under the lead
    /// time: alert-worthy immediately. The infinite sentinel never
    /// qualifies.
    pub fn critical_now(
        velocities: &[ProductVelocity],
        config: &EngineConfig,
    ) -> Vec<ProductVelocity> {
        let critical: Vec<ProductVelocity> = velocities
            .iter()
            .filter(|v| v.days_until_stockout <= config.lead_time_days as f64)
            .cloned()
            .collect();

        if !critical.is_empty() {
            info!(
                count = critical.len(),
                lead_time_days = config.lead_time_days,
                "products need immediate attention"
            );
        }

        critical
    }

    /// Simulate the alert calendar for every product, including
    /// non-critical ones. The alert date is lead_time_days before
    /// the projected stockout, clamped up to the evaluation date
    /// when already past (overdue alerts fire immediately).
    /// Products that never stock out carry no dates.
    pub fn simulate_schedule(
        velocities: &[ProductVelocity],
        config: &EngineConfig,
        evaluation_time: NaiveDateTime,
    ) -> Vec<AlertEntry> {
        velocities
            .iter()
            .map(|v| {
                let alert_date = v.stockout_date.map(|stockout| {
                    let raw = stockout - Duration::days(config.lead_time_days);
                    raw.max(evaluation_time).date()
                });

                AlertEntry {
                    product: v.product.clone(),
                    adjusted_stock: v.adjusted_stock.trunc() as i64,
                    avg_daily_sales: (v.avg_daily_sales * 100.0).round() / 100.0,
                    stockout_date: v.stockout_date.map(|d| d.date()),
                    alert_date,
                }
            })
            .collect()
    }

    /// Restock suggestions for every product under the safe
    /// threshold: enough units for the 30-day horizon, with a
    /// floor of 50.
    pub fn restock_suggestions(velocities: &[ProductVelocity]) -> Vec<RestockSuggestion> {
        velocities
            .iter()
            .filter(|v| v.days_until_stockout < SAFE_THRESHOLD_DAYS)
            .map(|v| RestockSuggestion {
                product: v.product.clone(),
                days_until_stockout: v.days_until_stockout,
                total_receipts: v.total_receipts,
                suggested_quantity: RESTOCK_FLOOR_UNITS
                    .max(v.avg_daily_sales * RESTOCK_HORIZON_DAYS),
            })
            .collect()
    }
}
