// ==========================================
// Stockwatch - Velocity Aggregator
// ==========================================
// Groups validated records by (calendar day, product), summing
// same-day quantities and receipts additively, then reduces the
// daily series per product into sales-velocity aggregates.
// Average daily sales is the mean over OBSERVED days only; missing
// calendar days are not zero-filled. That biases the average
// toward selling days and is a deliberate simplification.
// ==========================================

use crate::domain::record::ValidatedRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

// ==========================================
// ProductAggregate - per-product velocity figures
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAggregate {
    pub product: String,
    pub avg_daily_sales: f64,
    pub total_receipts: f64,
    /// Stock of the positionally-last record for the product in
    /// original input order. Stock is a snapshot field, not a flow
    /// field, so the last observation wins.
    pub current_stock: f64,
    /// Number of distinct calendar days with at least one record.
    pub observed_days: usize,
}

// ==========================================
// VelocityAggregator
// ==========================================
pub struct VelocityAggregator;

impl VelocityAggregator {
    /// Reduce the validated set into one aggregate per distinct
    /// product. Output is sorted by product name (BTreeMap keys),
    /// so identical input yields bit-identical output. An empty
    /// input yields an empty table, never an error.
    pub fn aggregate(records: &[ValidatedRecord]) -> Vec<ProductAggregate> {
        // Pass 1: last-seen stock per product, in input order.
        // A scan retaining the last value, not a pointer back into
        // the record list.
        let mut last_stock: HashMap<&str, f64> = HashMap::new();
        for record in records {
            last_stock.insert(record.product.as_str(), record.current_stock);
        }

        // Pass 2: additive (day, product) grouping.
        let mut daily: BTreeMap<(&str, NaiveDate), (f64, f64)> = BTreeMap::new();
        for record in records {
            let key = (record.product.as_str(), record.date.date());
            let entry = daily.entry(key).or_insert((0.0, 0.0));
            entry.0 += record.quantity;
            entry.1 += record.stock_receipts;
        }

        // Pass 3: per-product reduction over the daily series.
        let mut by_product: BTreeMap<&str, (f64, f64, usize)> = BTreeMap::new();
        for (&(product, _date), &(day_quantity, day_receipts)) in &daily {
            let entry = by_product.entry(product).or_insert((0.0, 0.0, 0));
            entry.0 += day_quantity;
            entry.1 += day_receipts;
            entry.2 += 1;
        }

        let aggregates: Vec<ProductAggregate> = by_product
            .into_iter()
            .map(|(product, (quantity_sum, receipts_sum, days))| ProductAggregate {
                product: product.to_string(),
                avg_daily_sales: quantity_sum / days as f64,
                total_receipts: receipts_sum,
                // every grouped product was seen in pass 1
                current_stock: last_stock.get(product).copied().unwrap_or_default(),
                observed_days: days,
            })
            .collect();

        debug!(
            records = records.len(),
            products = aggregates.len(),
            "aggregated sales velocity"
        );

        aggregates
    }
}
