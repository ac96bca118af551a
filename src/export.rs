// ==========================================
// Stockwatch - Prediction Table Export
// ==========================================
// Serializes the velocity table to delimited text for download.
// Column order and naming are a compatibility contract with
// external tooling; do not reorder or rename.
// ==========================================

use crate::domain::velocity::ProductVelocity;
use crate::importer::error::ImportResult;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The fixed export header.
pub const EXPORT_COLUMNS: [&str; 8] = [
    "product",
    "avg_daily_sales",
    "total_receipts",
    "current_stock",
    "adjusted_stock",
    "days_until_stockout",
    "stockout_date",
    "status",
];

/// Write the velocity table to any writer. Infinite remaining
/// days render as `inf`; an absent stockout date as an empty
/// field.
pub fn write_velocity_csv<W: Write>(velocities: &[ProductVelocity], writer: W) -> ImportResult<()> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer.write_record(EXPORT_COLUMNS)?;

    for row in velocities {
        csv_writer.write_record([
            row.product.clone(),
            row.avg_daily_sales.to_string(),
            row.total_receipts.to_string(),
            row.current_stock.to_string(),
            row.adjusted_stock.to_string(),
            row.days_until_stockout.to_string(),
            row.stockout_date
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            row.status.to_string(),
        ])?;
    }

    csv_writer.flush().map_err(crate::importer::ImportError::from)?;
    Ok(())
}

/// Export to a file path.
pub fn write_velocity_csv_file<P: AsRef<Path>>(
    velocities: &[ProductVelocity],
    path: P,
) -> ImportResult<()> {
    let file = File::create(path.as_ref())?;
    write_velocity_csv(velocities, file)
}

/// Export to an in-memory string, for callers that hand the bytes
/// to a download surface.
pub fn velocity_csv_string(velocities: &[ProductVelocity]) -> ImportResult<String> {
    let mut buffer = Vec::new();
    write_velocity_csv(velocities, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| crate::importer::ImportError::Other(e.into()))
}
