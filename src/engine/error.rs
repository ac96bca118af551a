// ==========================================
// Stockwatch - Engine Error Types
// ==========================================
// Only configuration problems are fatal; data problems are
// handled upstream by markers and defaults.
// ==========================================

use thiserror::Error;

/// Engine-layer error type
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("lead_time_days {value} outside valid range [{min}, {max}]")]
    InvalidLeadTime { value: i64, min: i64, max: i64 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias for the engine layer
pub type EngineResult<T> = Result<T, EngineError>;
