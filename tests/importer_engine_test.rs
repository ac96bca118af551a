// ==========================================
// Importer Integration Tests
// ==========================================
// Covers: column mapping -> normalization -> validation as one
// flow, including the marker and default policies.
// ==========================================

use std::collections::HashMap;
use stockwatch::importer::{ColumnMapping, FieldMapper, ImportError, RecordValidator};

// ==========================================
// Test helpers
// ==========================================

fn mapping(stock: Option<&str>, receipts: Option<&str>) -> ColumnMapping {
    ColumnMapping {
        date: "Date".to_string(),
        product: "Product".to_string(),
        quantity: "Quantity".to_string(),
        stock: stock.map(|s| s.to_string()),
        receipts: receipts.map(|s| s.to_string()),
    }
}

fn row(cells: &[(&str, &str)]) -> HashMap<String, String> {
    cells
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ==========================================
// Scenario: unparseable date among valid rows
// ==========================================

#[test]
fn test_unparseable_date_drops_exactly_one_row() {
    let mapper = FieldMapper::new(mapping(None, None)).unwrap();
    let rows = vec![
        row(&[("Date", "2026-03-01"), ("Product", "Widget"), ("Quantity", "10")]),
        row(&[("Date", "not-a-date"), ("Product", "Widget"), ("Quantity", "15")]),
        row(&[("Date", "2026-03-02"), ("Product", "Widget"), ("Quantity", "20")]),
    ];

    let normalized = mapper.normalize_rows(&rows);
    let (validated, report) = RecordValidator::validate(&normalized);

    // exactly one row gone, no panic anywhere
    assert_eq!(validated.len(), 2);
    assert_eq!(report.rows_in, 3);
    assert_eq!(report.rows_out, 2);
    assert_eq!(report.rows_dropped_bad_date, 1);
    assert_eq!(report.unparseable_date_samples, vec!["not-a-date".to_string()]);
}

// ==========================================
// Mixed date formats within one upload
// ==========================================

#[test]
fn test_mixed_date_formats_all_resolve() {
    let mapper = FieldMapper::new(mapping(None, None)).unwrap();
    let rows = vec![
        row(&[("Date", "2026-03-01"), ("Product", "W"), ("Quantity", "1")]),
        row(&[("Date", "03/02/2026"), ("Product", "W"), ("Quantity", "1")]),
        row(&[("Date", "March 3, 2026"), ("Product", "W"), ("Quantity", "1")]),
        row(&[("Date", "20260304"), ("Product", "W"), ("Quantity", "1")]),
    ];

    let normalized = mapper.normalize_rows(&rows);
    let (validated, report) = RecordValidator::validate(&normalized);

    assert_eq!(validated.len(), 4);
    assert_eq!(report.rows_dropped(), 0);

    let days: Vec<u32> = validated
        .iter()
        .map(|r| chrono::Datelike::day(&r.date.date()))
        .collect();
    assert_eq!(days, vec![1, 2, 3, 4]);
}

// ==========================================
// Quantity policy: drop, never zero-fill
// ==========================================

#[test]
fn test_invalid_quantities_dropped_not_zero_filled() {
    let mapper = FieldMapper::new(mapping(None, None)).unwrap();
    let rows = vec![
        row(&[("Date", "2026-03-01"), ("Product", "W"), ("Quantity", "10")]),
        row(&[("Date", "2026-03-01"), ("Product", "W"), ("Quantity", "oops")]),
        row(&[("Date", "2026-03-01"), ("Product", "W"), ("Quantity", "-4")]),
    ];

    let normalized = mapper.normalize_rows(&rows);
    let (validated, report) = RecordValidator::validate(&normalized);

    assert_eq!(validated.len(), 1);
    assert_eq!(report.rows_dropped_bad_quantity, 2);
    assert!(validated.iter().all(|r| r.quantity >= 0.0));
    // the surviving total is 10, not 10 plus two zero-fills
    let total: f64 = validated.iter().map(|r| r.quantity).sum();
    assert_eq!(total, 10.0);
}

// ==========================================
// Stock/receipts default policies
// ==========================================

#[test]
fn test_absent_columns_take_documented_defaults() {
    let mapper = FieldMapper::new(mapping(None, None)).unwrap();
    let rows = vec![row(&[
        ("Date", "2026-03-01"),
        ("Product", "W"),
        ("Quantity", "5"),
    ])];

    let normalized = mapper.normalize_rows(&rows);
    let (validated, _) = RecordValidator::validate(&normalized);

    assert_eq!(validated[0].current_stock, 100.0);
    assert_eq!(validated[0].stock_receipts, 0.0);
}

#[test]
fn test_bad_receipt_cell_fills_zero_and_keeps_row() {
    let mapper = FieldMapper::new(mapping(Some("Stock"), Some("Receipts"))).unwrap();
    let rows = vec![row(&[
        ("Date", "2026-03-01"),
        ("Product", "W"),
        ("Quantity", "5"),
        ("Stock", "80"),
        ("Receipts", "pending"),
    ])];

    let normalized = mapper.normalize_rows(&rows);
    let (validated, report) = RecordValidator::validate(&normalized);

    // receipts default to "no movement"; the row survives
    assert_eq!(validated.len(), 1);
    assert_eq!(report.rows_dropped(), 0);
    assert_eq!(validated[0].current_stock, 80.0);
    assert_eq!(validated[0].stock_receipts, 0.0);
}

// ==========================================
// Fatal configuration errors
// ==========================================

#[test]
fn test_missing_required_role_is_fatal() {
    let bad = ColumnMapping {
        date: "Date".to_string(),
        product: "  ".to_string(),
        quantity: "Quantity".to_string(),
        stock: None,
        receipts: None,
    };

    let result = FieldMapper::new(bad);
    assert!(matches!(result, Err(ImportError::MissingColumnRole { ref role }) if role == "product"));
}
