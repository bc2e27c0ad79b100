//! Valuation orchestration: fundamentals in, per-metric trend report out.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    FinancialField, FiscalYear, MarketDataProvider, MetricAnalysis, ValuationReport,
};
use crate::error::Result;
use crate::quant::{build_series, compute_cagr};

/// Runs the numeric half of the dossier against a market data source.
pub struct QuantitativeAnalysis {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuantitativeAnalysis {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Builds a trend analysis for every tracked financial field over at
    /// most `years` fiscal years of history.
    pub async fn evaluate_ticker(&self, symbol: &str, years: usize) -> Result<ValuationReport> {
        info!(symbol, years, "running quantitative analysis");

        let fundamentals = self.provider.get_fundamentals(symbol).await?;
        debug!(
            symbol,
            fiscal_years = fundamentals.fiscal_years.len(),
            "fundamentals retrieved"
        );

        let mut metrics = HashMap::new();
        for field in FinancialField::ALL {
            metrics.insert(
                field.name().to_string(),
                analyse_metric(&fundamentals.fiscal_years, field, years),
            );
        }

        Ok(ValuationReport {
            ticker: fundamentals.ticker,
            metrics,
        })
    }
}

fn analyse_metric(records: &[FiscalYear], field: FinancialField, window: usize) -> MetricAnalysis {
    let yearly_data = build_series(records, field, window);
    let cagr = compute_cagr(&yearly_data);
    MetricAnalysis {
        metric_name: field.display_name(),
        yearly_data,
        cagr,
    }
}
