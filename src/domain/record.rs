// ==========================================
// Stockwatch - Sales Record Domain Models
// ==========================================
// The three record shapes of the ingestion pipeline:
// RawRecord -> NormalizedRecord -> ValidatedRecord
// Dataflow is strictly forward; no stage mutates its input.
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ==========================================
// RawRecord - role-mapped cells of one input row
// ==========================================
// Values are the untouched cell text; stock and receipts are None
// when the caller mapped no column for that role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub row_number: usize,           // 1-based data row, for diagnostics
    pub date: String,                // raw date cell
    pub product: String,             // product identifier cell
    pub quantity: String,            // units-sold cell
    pub stock: Option<String>,       // current-stock cell, if mapped
    pub receipts: Option<String>,    // stock-receipts cell, if mapped
}

// ==========================================
// NormalizedRecord - coerced fields with explicit markers
// ==========================================
// `date: None` marks an unparseable date; `quantity: None` marks a
// value that failed coercion to a finite non-negative number. Stock
// and receipts never carry markers: they default instead (100 units
// of stock, 0 receipts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub row_number: usize,
    pub date: Option<NaiveDateTime>, // None = unparseable marker
    pub raw_date: String,            // kept for the unparseable sample
    pub product: String,
    pub quantity: Option<f64>,       // None = invalid marker
    pub current_stock: f64,
    pub stock_receipts: f64,
}

// ==========================================
// ValidatedRecord - marker-free subset
// ==========================================
// Invariants: quantity is finite and >= 0; date resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub date: NaiveDateTime,
    pub product: String,
    pub quantity: f64,
    pub current_stock: f64,
    pub stock_receipts: f64,
}
