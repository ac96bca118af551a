// ==========================================
// Stockwatch - Forecast Orchestrator
// ==========================================
// Composes aggregation, projection, classification and alert
// scheduling into one stateless pass over the validated set.
// evaluation_time is injected by the caller; the engine never
// reads a wall clock, so identical input yields identical output.
// ==========================================

use crate::config::EngineConfig;
use crate::domain::record::ValidatedRecord;
use crate::domain::velocity::{AlertEntry, ProductVelocity, RestockSuggestion};
use crate::engine::error::EngineResult;
use crate::engine::scheduler::AlertScheduler;
use crate::engine::projector::StockoutProjector;
use crate::engine::velocity::VelocityAggregator;
use chrono::NaiveDateTime;
use tracing::info;

// ==========================================
// ForecastReport - one full recomputation
// ==========================================
#[derive(Debug, Clone)]
pub struct ForecastReport {
    /// One row per distinct product, sorted by days-until-stockout
    /// ascending (most urgent first), ties by product name.
    pub velocities: Vec<ProductVelocity>,
    /// Subset of `velocities` needing an alert right now.
    pub critical_now: Vec<ProductVelocity>,
    /// Simulated alert calendar covering every product.
    pub schedule: Vec<AlertEntry>,
    /// Suggestions for products under the safe threshold.
    pub restock_suggestions: Vec<RestockSuggestion>,
}

impl ForecastReport {
    pub fn is_empty(&self) -> bool {
        self.velocities.is_empty()
    }

    /// Product names of the critical-now set, in table order.
    /// This is what a caller records into its notification log
    /// after a send action.
    pub fn critical_product_names(&self) -> Vec<String> {
        self.critical_now.iter().map(|v| v.product.clone()).collect()
    }
}

// ==========================================
// ForecastEngine
// ==========================================
pub struct ForecastEngine {
    config: EngineConfig,
}

impl ForecastEngine {
    /// Build an engine with a validated configuration. A lead time
    /// outside [1, 14] fails here, before any computation.
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full pipeline. An empty validated set yields an
    /// empty report, never an error.
    pub fn run(
        &self,
        records: &[ValidatedRecord],
        evaluation_time: NaiveDateTime,
    ) -> ForecastReport {
        let aggregates = VelocityAggregator::aggregate(records);

        let mut velocities: Vec<ProductVelocity> = aggregates
            .iter()
            .map(|agg| StockoutProjector::project(agg, evaluation_time))
            .collect();

        // Most urgent first; product name breaks ties so the order
        // is total and the run is reproducible.
        velocities.sort_by(|a, b| {
            a.days_until_stockout
                .partial_cmp(&b.days_until_stockout)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.product.cmp(&b.product))
        });

        let critical_now = AlertScheduler::critical_now(&velocities, &self.config);
        let schedule = AlertScheduler::simulate_schedule(&velocities, &self.config, evaluation_time);
        let restock_suggestions = AlertScheduler::restock_suggestions(&velocities);

        info!(
            products = velocities.len(),
            critical_now = critical_now.len(),
            restock_suggestions = restock_suggestions.len(),
            %evaluation_time,
            "forecast computed"
        );

        ForecastReport {
            velocities,
            critical_now,
            schedule,
            restock_suggestions,
        }
    }
}
