// ==========================================
// Stockwatch - Record Validator
// ==========================================
// Filters marker rows out of the normalized set and reports
// aggregate counts plus a sample of unparseable date values.
// Per-row problems stop here; nothing row-level escapes upward.
// ==========================================

use crate::domain::record::{NormalizedRecord, ValidatedRecord};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of distinct unparseable date values kept for user feedback.
const DATE_SAMPLE_LIMIT: usize = 5;

// ==========================================
// ValidationReport - aggregate diagnostics
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub rows_in: usize,
    pub rows_out: usize,
    pub rows_dropped_bad_date: usize,
    pub rows_dropped_bad_quantity: usize,
    /// Up to 5 distinct raw date values that failed parsing.
    pub unparseable_date_samples: Vec<String>,
}

impl ValidationReport {
    pub fn rows_dropped(&self) -> usize {
        self.rows_dropped_bad_date + self.rows_dropped_bad_quantity
    }
}

// ==========================================
// RecordValidator
// ==========================================
pub struct RecordValidator;

impl RecordValidator {
    /// Split the normalized set into the validated subset and a
    /// diagnostics report. A row missing both date and quantity is
    /// counted once, under the date rule (checked first).
    pub fn validate(records: &[NormalizedRecord]) -> (Vec<ValidatedRecord>, ValidationReport) {
        let mut validated = Vec::with_capacity(records.len());
        let mut report = ValidationReport {
            rows_in: records.len(),
            ..Default::default()
        };

        for record in records {
            let date = match record.date {
                Some(d) => d,
                None => {
                    report.rows_dropped_bad_date += 1;
                    if report.unparseable_date_samples.len() < DATE_SAMPLE_LIMIT
                        && !report.unparseable_date_samples.contains(&record.raw_date)
                    {
                        report.unparseable_date_samples.push(record.raw_date.clone());
                    }
                    continue;
                }
            };

            let quantity = match record.quantity {
                Some(q) => q,
                None => {
                    report.rows_dropped_bad_quantity += 1;
                    continue;
                }
            };

            validated.push(ValidatedRecord {
                date,
                product: record.product.clone(),
                quantity,
                current_stock: record.current_stock,
                stock_receipts: record.stock_receipts,
            });
        }

        report.rows_out = validated.len();

        if report.rows_dropped() > 0 {
            warn!(
                rows_in = report.rows_in,
                dropped_bad_date = report.rows_dropped_bad_date,
                dropped_bad_quantity = report.rows_dropped_bad_quantity,
                samples = ?report.unparseable_date_samples,
                "dropped rows during validation"
            );
        }

        (validated, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn normalized(
        row_number: usize,
        date: Option<&str>,
        quantity: Option<f64>,
    ) -> NormalizedRecord {
        NormalizedRecord {
            row_number,
            date: date.map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            }),
            raw_date: date.unwrap_or("not-a-date").to_string(),
            product: "Widget".to_string(),
            quantity,
            current_stock: 100.0,
            stock_receipts: 0.0,
        }
    }

    #[test]
    fn test_all_valid_rows_pass() {
        let records = vec![
            normalized(1, Some("2026-03-01"), Some(10.0)),
            normalized(2, Some("2026-03-02"), Some(20.0)),
        ];

        let (validated, report) = RecordValidator::validate(&records);
        assert_eq!(validated.len(), 2);
        assert_eq!(report.rows_in, 2);
        assert_eq!(report.rows_out, 2);
        assert_eq!(report.rows_dropped(), 0);
    }

    #[test]
    fn test_bad_date_dropped_and_sampled() {
        let records = vec![
            normalized(1, Some("2026-03-01"), Some(10.0)),
            normalized(2, None, Some(20.0)),
        ];

        let (validated, report) = RecordValidator::validate(&records);
        assert_eq!(validated.len(), 1);
        assert_eq!(report.rows_dropped_bad_date, 1);
        assert_eq!(report.unparseable_date_samples, vec!["not-a-date".to_string()]);
    }

    #[test]
    fn test_bad_quantity_dropped() {
        let records = vec![
            normalized(1, Some("2026-03-01"), None),
            normalized(2, Some("2026-03-02"), Some(5.0)),
        ];

        let (validated, report) = RecordValidator::validate(&records);
        assert_eq!(validated.len(), 1);
        assert_eq!(report.rows_dropped_bad_quantity, 1);
        assert_eq!(validated[0].quantity, 5.0);
    }

    #[test]
    fn test_date_sample_capped_and_distinct() {
        let mut records = Vec::new();
        for i in 0..8 {
            let mut rec = normalized(i + 1, None, Some(1.0));
            rec.raw_date = format!("junk-{}", i);
            records.push(rec);
        }
        // a duplicate raw value must not be sampled twice
        let mut dup = normalized(9, None, Some(1.0));
        dup.raw_date = "junk-0".to_string();
        records.push(dup);

        let (_, report) = RecordValidator::validate(&records);
        assert_eq!(report.rows_dropped_bad_date, 9);
        assert_eq!(report.unparseable_date_samples.len(), DATE_SAMPLE_LIMIT);
        assert_eq!(
            report
                .unparseable_date_samples
                .iter()
                .filter(|s| *s == "junk-0")
                .count(),
            1
        );
    }

    #[test]
    fn test_row_missing_both_counts_once_under_date() {
        let records = vec![normalized(1, None, None)];

        let (validated, report) = RecordValidator::validate(&records);
        assert!(validated.is_empty());
        assert_eq!(report.rows_dropped_bad_date, 1);
        assert_eq!(report.rows_dropped_bad_quantity, 0);
        assert_eq!(report.rows_dropped(), 1);
    }

    #[test]
    fn test_validated_set_never_negative() {
        // markers are the only path to a dropped quantity; whatever
        // survives is finite and non-negative by construction
        let records = vec![
            normalized(1, Some("2026-03-01"), Some(0.0)),
            normalized(2, Some("2026-03-01"), Some(3.5)),
            normalized(3, Some("2026-03-01"), None),
        ];

        let (validated, _) = RecordValidator::validate(&records);
        assert!(validated.iter().all(|r| r.quantity >= 0.0 && r.quantity.is_finite()));
    }
}
