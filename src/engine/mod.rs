// ==========================================
// Stockwatch - Engine Layer
// ==========================================
// The forecasting pipeline: velocity aggregation -> stockout
// projection -> risk classification -> alert scheduling, composed
// by the orchestrator. Pure, synchronous, deterministic given the
// same validated set and evaluation_time.
// ==========================================

pub mod classifier;
pub mod error;
pub mod orchestrator;
pub mod projector;
pub mod scheduler;
pub mod velocity;

// Re-export core engines
pub use classifier::classify_days;
pub use error::{EngineError, EngineResult};
pub use orchestrator::{ForecastEngine, ForecastReport};
pub use projector::StockoutProjector;
pub use scheduler::AlertScheduler;
pub use velocity::{ProductAggregate, VelocityAggregator};
