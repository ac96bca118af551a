// ==========================================
// Stockwatch - CLI Entry Point
// ==========================================
// Reads a JSON run configuration (input CSV, column mapping, lead
// time, optional export path), runs the full forecasting pipeline
// at the current time, and reports through the log.
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde::Deserialize;
use std::path::PathBuf;
use stockwatch::config::EngineConfig;
use stockwatch::engine::ForecastEngine;
use stockwatch::export;
use stockwatch::importer::{ColumnMapping, CsvParser, FieldMapper, RecordValidator};
use stockwatch::logging;
use tracing::{info, warn};

// ==========================================
// RunConfig - one forecasting run
// ==========================================
#[derive(Debug, Deserialize)]
struct RunConfig {
    /// Input CSV with the sales records.
    input: PathBuf,
    /// Column-to-role mapping for the input file.
    mapping: ColumnMapping,
    /// Days of lead time before a projected stockout.
    #[serde(default)]
    lead_time_days: Option<i64>,
    /// Optional path for the prediction table export.
    #[serde(default)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();

    info!("==================================================");
    info!("{} - stock depletion forecasting", stockwatch::APP_NAME);
    info!("version: {}", stockwatch::VERSION);
    info!("==================================================");

    let config_path = match std::env::args().nth(1) {
        Some(p) => PathBuf::from(p),
        None => bail!("usage: stockwatch <run-config.json>"),
    };

    let config_text = std::fs::read_to_string(&config_path)
        .with_context(|| format!("reading run config {}", config_path.display()))?;
    let run_config: RunConfig =
        serde_json::from_str(&config_text).context("parsing run config")?;

    let engine_config = match run_config.lead_time_days {
        Some(days) => EngineConfig::new(days)?,
        None => EngineConfig::default(),
    };

    // Ingest: CSV -> normalized -> validated
    let rows = CsvParser::parse_to_rows(&run_config.input)?;
    info!(rows = rows.len(), input = %run_config.input.display(), "loaded sales data");

    let mapper = FieldMapper::new(run_config.mapping)?;
    let normalized = mapper.normalize_rows(&rows);
    let (validated, report) = RecordValidator::validate(&normalized);

    if report.rows_dropped_bad_date > 0 {
        warn!(
            count = report.rows_dropped_bad_date,
            samples = ?report.unparseable_date_samples,
            "could not parse some date values"
        );
    }

    // Forecast at the current time. The binary is the caller, so
    // sampling the clock happens here and only here.
    let engine = ForecastEngine::new(engine_config)?;
    let evaluation_time = Utc::now().naive_utc();
    let forecast = engine.run(&validated, evaluation_time);

    if forecast.is_empty() {
        warn!("no usable records after validation; nothing to forecast");
        return Ok(());
    }

    for row in &forecast.velocities {
        info!(
            product = %row.product,
            avg_daily_sales = format!("{:.2}", row.avg_daily_sales),
            adjusted_stock = row.adjusted_stock,
            days_until_stockout = format!("{:.1}", row.days_until_stockout),
            status = %row.status,
            "prediction"
        );
    }

    for critical in &forecast.critical_now {
        warn!(
            product = %critical.product,
            days_until_stockout = format!("{:.1}", critical.days_until_stockout),
            "urgent restocking required"
        );
    }

    for suggestion in &forecast.restock_suggestions {
        info!(
            product = %suggestion.product,
            suggested_quantity = format!("{:.0}", suggestion.suggested_quantity),
            lasts_days = format!("{:.1}", suggestion.days_until_stockout),
            "restock suggested"
        );
    }

    for entry in &forecast.schedule {
        match (entry.stockout_date, entry.alert_date) {
            (Some(stockout), Some(alert)) => info!(
                product = %entry.product,
                stockout_date = %stockout,
                alert_date = %alert,
                "simulated alert"
            ),
            _ => info!(product = %entry.product, "no alert under current velocity"),
        }
    }

    if let Some(output) = &run_config.output {
        export::write_velocity_csv_file(&forecast.velocities, output)?;
        info!(output = %output.display(), "prediction table exported");
    }

    Ok(())
}
