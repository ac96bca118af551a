// ==========================================
// Stockwatch - Core Library
// ==========================================
// Stock depletion forecasting and restock alert engine: sales
// records in, per-product stockout projections, traffic-light
// risk tiers and a simulated alert calendar out. The engine is a
// pure, synchronous pass; evaluation time is always injected.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - records, result rows, risk tiers
pub mod domain;

// Engine layer - the forecasting pipeline
pub mod engine;

// Import layer - external tabular data in
pub mod importer;

// Configuration layer - per-run config and policy constants
pub mod config;

// Export surface - prediction table out
pub mod export;

// Logging
pub mod logging;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::{
    AlertEntry, NormalizedRecord, NotificationLog, NotificationRecord, ProductVelocity,
    RawRecord, RestockSuggestion, StockStatus, ValidatedRecord,
};

// Engines
pub use engine::{
    classify_days, AlertScheduler, EngineError, ForecastEngine, ForecastReport,
    StockoutProjector, VelocityAggregator,
};

// Importer
pub use importer::{
    ColumnMapping, CsvParser, DateParser, FieldMapper, ImportError, RecordValidator,
    ValidationReport,
};

// Configuration
pub use config::EngineConfig;

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Stockwatch";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
