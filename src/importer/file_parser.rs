// ==========================================
// Stockwatch - CSV File Parser
// ==========================================
// Reads an input CSV into header-keyed row maps for the field
// mapper. Used by the binary; library callers may hand the
// importer rows from any source in the same shape.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

pub struct CsvParser;

impl CsvParser {
    /// Parse a CSV file into one HashMap per data row, keyed by
    /// trimmed header names. Fully blank rows are skipped.
    pub fn parse_to_rows<P: AsRef<Path>>(path: P) -> ImportResult<Vec<HashMap<String, String>>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        if let Some(ext) = path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged rows
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(rows)
    }
}
