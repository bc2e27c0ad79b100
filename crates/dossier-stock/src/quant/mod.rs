//! Deterministic numeric core: statement parsing, three-statement
//! reconciliation, metric series construction, and trend measurement.

mod cagr;
mod parser;
mod reconcile;
mod series;

pub use cagr::compute_cagr;
pub use parser::{decimal_field, parse_decimal};
pub use reconcile::reconcile_fiscal_years;
pub use series::build_series;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FinancialField;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};

    fn income(date: &str, revenue: &str) -> Value {
        json!({ "fiscalDateEnding": date, "totalRevenue": revenue })
    }

    fn counterpart(date: &str) -> Value {
        json!({ "fiscalDateEnding": date })
    }

    #[test]
    fn test_raw_reports_through_series_to_cagr() {
        // The full path: raw provider reports reconcile into fiscal
        // years, one field becomes a dated series, and the series yields
        // its growth rate.
        let income_reports = vec![
            income("2024-12-31", "121"),
            income("2023-12-31", "110"),
            income("2022-12-31", "100"),
        ];
        let balance_reports = vec![
            counterpart("2024-12-31"),
            counterpart("2023-12-31"),
            counterpart("2022-12-31"),
        ];
        let cash_reports = balance_reports.clone();

        let years = reconcile_fiscal_years(&income_reports, &balance_reports, &cash_reports)
            .expect("all statements present");

        let points = build_series(&years, FinancialField::Revenue, 10);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, "2024-12-31");
        assert_eq!(points[0].value, dec!(121));
        assert_eq!(points[1].date, "2023-12-31");
        assert_eq!(points[1].value, dec!(110));
        assert_eq!(points[2].date, "2022-12-31");
        assert_eq!(points[2].value, dec!(100));

        assert_eq!(compute_cagr(&points), Some(dec!(10.00)));
    }
}
