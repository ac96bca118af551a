// ==========================================
// Stockwatch - Configuration Layer
// ==========================================
// Per-run engine configuration plus the policy constants the
// pipeline shares (defaults, thresholds, restock horizon).
// ==========================================

pub mod engine_config;

pub use engine_config::{
    EngineConfig, DEFAULT_CURRENT_STOCK, DEFAULT_STOCK_RECEIPTS, LOW_THRESHOLD_DAYS,
    MAX_LEAD_TIME_DAYS, MIN_LEAD_TIME_DAYS, RESTOCK_FLOOR_UNITS, RESTOCK_HORIZON_DAYS,
    SAFE_THRESHOLD_DAYS,
};
