//! Domain entities for the investment dossier

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Current price of a stock. The currency is an informational tag only;
/// no conversion happens anywhere in the dossier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub amount: Decimal,
    pub currency: String,
}

impl Price {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// Ticker metadata: symbol, company name, sector and industry classification.
///
/// Sector and industry fall back to `"Unknown"` when the data provider has
/// nothing for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
}

impl Ticker {
    /// Create a ticker with only a symbol; metadata defaults apply.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: String::new(),
            sector: "Unknown".to_string(),
            industry: "Unknown".to_string(),
        }
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({}/{})",
            self.symbol, self.name, self.sector, self.industry
        )
    }
}

/// One reconciled fiscal year: the fifteen line items merged from the
/// income statement, balance sheet and cash-flow statement reported for
/// the same `fiscal_date_ending`.
///
/// Values are never null; absent source data normalizes to zero at
/// reconciliation time. `total_debt` is always derived as
/// `short_term_debt + long_term_debt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiscalYear {
    pub fiscal_date_ending: String,

    pub revenue: Decimal,
    pub ebitda: Decimal,

    pub gross_profit: Decimal,
    pub operating_income: Decimal,
    pub net_income: Decimal,

    pub operating_cash_flow: Decimal,
    pub capital_expenditures: Decimal,

    pub shares_outstanding: Decimal,

    pub short_term_debt: Decimal,
    pub long_term_debt: Decimal,
    pub total_debt: Decimal,

    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub cash_and_equivalents: Decimal,
}

/// One (date, value) observation of a financial metric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub date: String,
    pub value: Decimal,
}

/// One metric's windowed time series plus its growth rate.
///
/// `yearly_data` is ordered most-recent-first, matching the reconciled
/// fiscal-year list it was extracted from. `cagr` is absent when the
/// series is too short or has a non-positive endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricAnalysis {
    pub metric_name: String,
    pub yearly_data: Vec<MetricPoint>,
    pub cagr: Option<Decimal>,
}

/// Ticker metadata plus current price plus reconciled fiscal years, as
/// returned by a market-data provider in one fundamental fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockFundamentals {
    pub ticker: Ticker,
    pub price: Price,
    pub fiscal_years: Vec<FiscalYear>,
}

/// The quantitative section of the dossier: one `MetricAnalysis` per
/// tracked financial field, keyed by the field's snake_case name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationReport {
    pub ticker: Ticker,
    pub metrics: HashMap<String, MetricAnalysis>,
}

/// AI-generated qualitative research record for a company.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub business_description: String,
    pub company_history: String,
    pub ceo_name: String,
    pub ceo_ownership: Decimal,
    pub major_shareholders: HashMap<String, Decimal>,
    pub revenue_model: String,
    pub strategy: String,
    pub products_services: HashMap<String, String>,
    pub competitive_advantage: String,
    pub competitors: HashMap<String, String>,
    pub management_insights: String,
    pub risk_factors: HashMap<String, String>,
    pub historical_context_crises: String,
}

/// AI-generated industry structure record (Porter's five forces).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustryDynamics {
    pub sector: String,
    pub industry: String,
    pub rivalry_among_competitors: HashMap<String, String>,
    pub bargaining_power_of_suppliers: HashMap<String, String>,
    pub bargaining_power_of_customers: HashMap<String, String>,
    pub threat_of_new_entrants: HashMap<String, String>,
    pub threat_of_obsolescence: HashMap<String, String>,
    pub economic_sensitivity: String,
    pub interest_rate_exposure: String,
}

/// The qualitative section of the dossier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualitativeReport {
    pub ticker: Ticker,
    pub profile: CompanyProfile,
}

/// The sector/industry section of the dossier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorReport {
    pub ticker: Ticker,
    pub dynamics: IndustryDynamics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_price_display() {
        let price = Price::new(dec!(150), "USD");
        assert_eq!(price.to_string(), "150.00 USD");
    }

    #[test]
    fn test_ticker_defaults() {
        let ticker = Ticker::new("AAPL");
        assert_eq!(ticker.symbol, "AAPL");
        assert_eq!(ticker.name, "");
        assert_eq!(ticker.sector, "Unknown");
        assert_eq!(ticker.industry, "Unknown");
        assert_eq!(ticker.to_string(), "AAPL -  (Unknown/Unknown)");
    }

    #[test]
    fn test_company_profile_ignores_extra_fields() {
        // The narrative provider echoes the ticker back; the profile does
        // not carry it, so deserialization must tolerate the extra key.
        let raw = serde_json::json!({
            "ticker": "AAPL",
            "business_description": "Designs and sells consumer electronics.",
            "company_history": "Founded 1976.",
            "ceo_name": "Tim Cook",
            "ceo_ownership": 0.02,
            "major_shareholders": { "Vanguard": 8.5 },
            "revenue_model": "Hardware and services.",
            "strategy": "Ecosystem lock-in.",
            "products_services": { "iPhone": "Smartphone" },
            "competitive_advantage": "Brand and ecosystem.",
            "competitors": { "Samsung": "Smartphones" },
            "management_insights": "Stable leadership.",
            "risk_factors": { "Supply chain": "Concentrated in Asia" },
            "historical_context_crises": "Survived near-bankruptcy in 1997."
        });

        let profile: CompanyProfile =
            serde_json::from_value(raw).expect("profile should deserialize");
        assert_eq!(profile.ceo_name, "Tim Cook");
        assert_eq!(profile.major_shareholders["Vanguard"], dec!(8.5));
    }
}
