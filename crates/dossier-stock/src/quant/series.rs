//! Metric time-series extraction

use crate::domain::{FinancialField, FiscalYear, MetricPoint};

/// Extracts one field's (date, value) series over at most `window` of the
/// given fiscal years.
///
/// Takes the first `window` records as-is, trusting the reconciler's
/// most-recent-first ordering. Short history yields fewer points; this
/// never pads and never errors.
pub fn build_series(
    records: &[FiscalYear],
    field: FinancialField,
    window: usize,
) -> Vec<MetricPoint> {
    records
        .iter()
        .take(window)
        .map(|year| MetricPoint {
            date: year.fiscal_date_ending.clone(),
            value: field.extract(year),
        })
        .collect()
}
