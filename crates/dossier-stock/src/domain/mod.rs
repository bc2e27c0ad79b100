//! Domain model: entities, tracked fields, and provider capabilities

mod entities;
mod fields;
mod providers;

pub use entities::{
    CompanyProfile, FiscalYear, IndustryDynamics, MetricAnalysis, MetricPoint, Price,
    QualitativeReport, SectorReport, StockFundamentals, Ticker, ValuationReport,
};
pub use fields::FinancialField;
pub use providers::{MarketDataProvider, NarrativeProvider};

#[cfg(test)]
pub use providers::{MockMarketDataProvider, MockNarrativeProvider};
