//! Company-level narrative analysis.

use std::sync::Arc;

use tracing::info;

use crate::domain::{MarketDataProvider, NarrativeProvider, QualitativeReport};
use crate::error::Result;

/// Produces the qualitative half of the dossier: a structured company
/// profile sourced from the narrative provider, tied to verified ticker
/// identity from the market data provider.
pub struct QualitativeAnalysis {
    market_data: Arc<dyn MarketDataProvider>,
    narrative: Arc<dyn NarrativeProvider>,
}

impl QualitativeAnalysis {
    pub fn new(
        market_data: Arc<dyn MarketDataProvider>,
        narrative: Arc<dyn NarrativeProvider>,
    ) -> Self {
        Self {
            market_data,
            narrative,
        }
    }

    pub async fn profile_company(&self, symbol: &str) -> Result<QualitativeReport> {
        info!(symbol, "running qualitative analysis");

        let ticker = self.market_data.get_ticker_info(symbol).await?;
        let profile = self.narrative.analyse_company(&ticker.symbol).await?;

        Ok(QualitativeReport { ticker, profile })
    }
}
