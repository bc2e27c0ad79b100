//! Provider capabilities the dossier consumes
//!
//! The core is agnostic to transport: anything implementing these traits
//! can back a dossier. Concrete clients live under [`crate::api`].

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entities::{CompanyProfile, IndustryDynamics, StockFundamentals, Ticker};
use crate::error::Result;

/// Market-data capability: ticker metadata and reconciled fundamentals.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch basic metadata for a ticker (name, sector, industry).
    async fn get_ticker_info(&self, symbol: &str) -> Result<Ticker>;

    /// Fetch the current price and the reconciled per-fiscal-year
    /// statement data for a ticker.
    async fn get_fundamentals(&self, symbol: &str) -> Result<StockFundamentals>;
}

/// Narrative capability: AI-generated qualitative research records.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Produce a qualitative company profile for a ticker.
    async fn analyse_company(&self, symbol: &str) -> Result<CompanyProfile>;

    /// Produce an industry-structure analysis for a sector/industry pair.
    async fn analyse_industry(&self, sector: &str, industry: &str) -> Result<IndustryDynamics>;
}
