// ==========================================
// Stockwatch - Column Mapping & Field Coercion
// ==========================================
// Maps caller-chosen columns onto the five record roles and
// coerces cell text into a NormalizedRecord. Dates and quantities
// that fail coercion become explicit markers; stock and receipts
// fall back to documented defaults instead.
// ==========================================

use crate::config::{DEFAULT_CURRENT_STOCK, DEFAULT_STOCK_RECEIPTS};
use crate::domain::record::{NormalizedRecord, RawRecord};
use crate::importer::date_parser::DateParser;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// ColumnMapping - column name per record role
// ==========================================
// date/product/quantity are required; stock and receipts are
// optional and trigger the default policies when unmapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub date: String,
    pub product: String,
    pub quantity: String,
    #[serde(default)]
    pub stock: Option<String>,
    #[serde(default)]
    pub receipts: Option<String>,
}

impl ColumnMapping {
    /// Reject mappings with an empty required role. A structurally
    /// bad mapping fails the whole run (fatal), unlike per-row data
    /// problems which only produce markers.
    pub fn validate(&self) -> ImportResult<()> {
        for (role, column) in [
            ("date", &self.date),
            ("product", &self.product),
            ("quantity", &self.quantity),
        ] {
            if column.trim().is_empty() {
                return Err(ImportError::MissingColumnRole {
                    role: role.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ==========================================
// FieldMapper - row map -> records
// ==========================================
pub struct FieldMapper {
    mapping: ColumnMapping,
}

impl FieldMapper {
    pub fn new(mapping: ColumnMapping) -> ImportResult<Self> {
        mapping.validate()?;
        Ok(Self { mapping })
    }

    /// Extract the role-mapped cells of one header-keyed row.
    /// Missing cells read as empty text and flow into the marker
    /// and default policies downstream.
    pub fn map_to_raw(&self, row: &HashMap<String, String>, row_number: usize) -> RawRecord {
        RawRecord {
            row_number,
            date: self.get_cell(row, &self.mapping.date),
            product: self.get_cell(row, &self.mapping.product),
            quantity: self.get_cell(row, &self.mapping.quantity),
            stock: self
                .mapping
                .stock
                .as_ref()
                .map(|col| self.get_cell(row, col)),
            receipts: self
                .mapping
                .receipts
                .as_ref()
                .map(|col| self.get_cell(row, col)),
        }
    }

    /// Coerce one raw record into a normalized record.
    ///
    /// - date: flexible parse, None marker on failure
    /// - quantity: finite non-negative number, None marker otherwise
    /// - stock: default 100.0 when unmapped or unparseable
    /// - receipts: default 0.0 when unmapped or unparseable
    pub fn normalize(&self, raw: &RawRecord) -> NormalizedRecord {
        NormalizedRecord {
            row_number: raw.row_number,
            date: DateParser::parse_flexible(&raw.date),
            raw_date: raw.date.clone(),
            product: raw.product.trim().to_string(),
            quantity: Self::coerce_quantity(&raw.quantity),
            current_stock: Self::coerce_or_default(raw.stock.as_deref(), DEFAULT_CURRENT_STOCK),
            stock_receipts: Self::coerce_or_default(
                raw.receipts.as_deref(),
                DEFAULT_STOCK_RECEIPTS,
            ),
        }
    }

    /// Map and normalize a whole row set, preserving input order.
    /// Row numbers are 1-based data rows (header excluded).
    pub fn normalize_rows(&self, rows: &[HashMap<String, String>]) -> Vec<NormalizedRecord> {
        rows.iter()
            .enumerate()
            .map(|(idx, row)| {
                let raw = self.map_to_raw(row, idx + 1);
                self.normalize(&raw)
            })
            .collect()
    }

    fn get_cell(&self, row: &HashMap<String, String>, column: &str) -> String {
        row.get(column).map(|v| v.trim().to_string()).unwrap_or_default()
    }

    /// Quantity policy is strict: anything that is not a finite
    /// number >= 0 becomes the invalid marker and the row is later
    /// dropped rather than zero-filled, to avoid corrupting the
    /// velocity average.
    fn coerce_quantity(value: &str) -> Option<f64> {
        let parsed: f64 = value.trim().parse().ok()?;
        if parsed.is_finite() && parsed >= 0.0 {
            Some(parsed)
        } else {
            None
        }
    }

    /// Stock/receipts policy is lenient: absent or unparseable
    /// cells take the documented default and never drop the row.
    fn coerce_or_default(value: Option<&str>, default: f64) -> f64 {
        match value {
            Some(v) => match v.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => parsed,
                _ => default,
            },
            None => default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn full_mapping() -> ColumnMapping {
        ColumnMapping {
            date: "Date".to_string(),
            product: "Product".to_string(),
            quantity: "Qty".to_string(),
            stock: Some("Stock".to_string()),
            receipts: Some("Receipts".to_string()),
        }
    }

    fn minimal_mapping() -> ColumnMapping {
        ColumnMapping {
            date: "Date".to_string(),
            product: "Product".to_string(),
            quantity: "Qty".to_string(),
            stock: None,
            receipts: None,
        }
    }

    fn row(cells: &[(&str, &str)]) -> HashMap<String, String> {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_mapping_requires_all_roles() {
        let mut mapping = minimal_mapping();
        mapping.quantity = "".to_string();
        assert!(matches!(
            mapping.validate(),
            Err(ImportError::MissingColumnRole { .. })
        ));
        assert!(minimal_mapping().validate().is_ok());
    }

    #[test]
    fn test_normalize_full_row() {
        let mapper = FieldMapper::new(full_mapping()).unwrap();
        let rows = vec![row(&[
            ("Date", "2026-03-01"),
            ("Product", "  Widget "),
            ("Qty", "12.5"),
            ("Stock", "200"),
            ("Receipts", "30"),
        ])];

        let normalized = mapper.normalize_rows(&rows);
        assert_eq!(normalized.len(), 1);
        let rec = &normalized[0];
        assert_eq!(rec.row_number, 1);
        assert_eq!(
            rec.date,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(rec.product, "Widget");
        assert_eq!(rec.quantity, Some(12.5));
        assert_eq!(rec.current_stock, 200.0);
        assert_eq!(rec.stock_receipts, 30.0);
    }

    #[test]
    fn test_unmapped_stock_and_receipts_default() {
        let mapper = FieldMapper::new(minimal_mapping()).unwrap();
        let rows = vec![row(&[("Date", "2026-03-01"), ("Product", "W"), ("Qty", "1")])];

        let rec = &mapper.normalize_rows(&rows)[0];
        assert_eq!(rec.current_stock, DEFAULT_CURRENT_STOCK);
        assert_eq!(rec.stock_receipts, DEFAULT_STOCK_RECEIPTS);
    }

    #[test]
    fn test_unparseable_stock_and_receipts_default() {
        let mapper = FieldMapper::new(full_mapping()).unwrap();
        let rows = vec![row(&[
            ("Date", "2026-03-01"),
            ("Product", "W"),
            ("Qty", "1"),
            ("Stock", "n/a"),
            ("Receipts", "??"),
        ])];

        let rec = &mapper.normalize_rows(&rows)[0];
        assert_eq!(rec.current_stock, DEFAULT_CURRENT_STOCK);
        assert_eq!(rec.stock_receipts, DEFAULT_STOCK_RECEIPTS);
        // stock/receipt problems never produce markers
        assert!(rec.quantity.is_some());
    }

    #[test]
    fn test_quantity_markers() {
        let mapper = FieldMapper::new(minimal_mapping()).unwrap();
        let rows = vec![
            row(&[("Date", "2026-03-01"), ("Product", "W"), ("Qty", "abc")]),
            row(&[("Date", "2026-03-01"), ("Product", "W"), ("Qty", "-5")]),
            row(&[("Date", "2026-03-01"), ("Product", "W"), ("Qty", "inf")]),
            row(&[("Date", "2026-03-01"), ("Product", "W"), ("Qty", "NaN")]),
            row(&[("Date", "2026-03-01"), ("Product", "W"), ("Qty", "0")]),
        ];

        let normalized = mapper.normalize_rows(&rows);
        assert_eq!(normalized[0].quantity, None);
        assert_eq!(normalized[1].quantity, None);
        assert_eq!(normalized[2].quantity, None);
        assert_eq!(normalized[3].quantity, None);
        // zero is a valid quantity, not a marker
        assert_eq!(normalized[4].quantity, Some(0.0));
    }

    #[test]
    fn test_date_marker_retains_raw_value() {
        let mapper = FieldMapper::new(minimal_mapping()).unwrap();
        let rows = vec![row(&[("Date", "not-a-date"), ("Product", "W"), ("Qty", "1")])];

        let rec = &mapper.normalize_rows(&rows)[0];
        assert!(rec.date.is_none());
        assert_eq!(rec.raw_date, "not-a-date");
    }

    #[test]
    fn test_missing_cell_reads_as_empty() {
        let mapper = FieldMapper::new(minimal_mapping()).unwrap();
        let rows = vec![row(&[("Product", "W"), ("Qty", "1")])];

        let rec = &mapper.normalize_rows(&rows)[0];
        assert!(rec.date.is_none());
        assert_eq!(rec.raw_date, "");
    }
}
