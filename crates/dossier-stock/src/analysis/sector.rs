//! Sector and industry structure analysis.

use std::sync::Arc;

use tracing::info;

use crate::domain::{MarketDataProvider, NarrativeProvider, SectorReport};
use crate::error::Result;

/// Maps a ticker to its sector and industry, then asks the narrative
/// provider for a competitive-dynamics breakdown of that space.
pub struct SectorAnalysis {
    market_data: Arc<dyn MarketDataProvider>,
    narrative: Arc<dyn NarrativeProvider>,
}

impl SectorAnalysis {
    pub fn new(
        market_data: Arc<dyn MarketDataProvider>,
        narrative: Arc<dyn NarrativeProvider>,
    ) -> Self {
        Self {
            market_data,
            narrative,
        }
    }

    pub async fn analyse_sector(&self, symbol: &str) -> Result<SectorReport> {
        info!(symbol, "running sector analysis");

        let ticker = self.market_data.get_ticker_info(symbol).await?;
        let dynamics = self
            .narrative
            .analyse_industry(&ticker.sector, &ticker.industry)
            .await?;

        Ok(SectorReport { ticker, dynamics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IndustryDynamics, MockMarketDataProvider, MockNarrativeProvider, Ticker};

    #[tokio::test]
    async fn test_analyse_sector_passes_classification_through() {
        let mut market_data = MockMarketDataProvider::new();
        market_data.expect_get_ticker_info().returning(|symbol| {
            let mut ticker = Ticker::new(symbol);
            ticker.sector = "Technology".to_string();
            ticker.industry = "Semiconductors".to_string();
            Ok(ticker)
        });

        let mut narrative = MockNarrativeProvider::new();
        narrative
            .expect_analyse_industry()
            .withf(|sector, industry| sector == "Technology" && industry == "Semiconductors")
            .returning(|sector, industry| {
                Ok(IndustryDynamics {
                    sector: sector.to_string(),
                    industry: industry.to_string(),
                    ..IndustryDynamics::default()
                })
            });

        let analysis = SectorAnalysis::new(Arc::new(market_data), Arc::new(narrative));
        let report = analysis.analyse_sector("TEST").await.unwrap();

        assert_eq!(report.dynamics.sector, "Technology");
        assert_eq!(report.dynamics.industry, "Semiconductors");
    }
}
