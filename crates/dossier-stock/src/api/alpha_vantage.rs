//! Alpha Vantage API client

use crate::cache::{CacheKey, CacheManager};
use crate::domain::{MarketDataProvider, Price, StockFundamentals, Ticker};
use crate::error::{DossierError, Result};
use crate::quant::reconcile_fiscal_years;
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use serde_json::Value;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

const BASE_URL: &str = "https://www.alphavantage.co/query";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Alpha Vantage API client
///
/// Every request waits on a shared per-minute rate limiter and goes
/// through the response cache, so a full dossier run stays inside the
/// free-tier quota.
#[derive(Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    rate_limiter: SharedRateLimiter,
    cache: Arc<CacheManager>,
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client
    ///
    /// # Arguments
    /// * `api_key` - Alpha Vantage API key
    /// * `rate_limit` - Maximum requests per minute (free tier: 5)
    /// * `timeout` - Per-request timeout
    /// * `cache` - Shared response cache
    pub fn new(
        api_key: impl Into<String>,
        rate_limit: u32,
        timeout: Duration,
        cache: Arc<CacheManager>,
    ) -> Self {
        let quota =
            Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::new(5).unwrap()));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            rate_limiter,
            cache,
        }
    }

    /// Create from environment variable ALPHA_VANTAGE_API_KEY with
    /// free-tier defaults
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ALPHA_VANTAGE_API_KEY").map_err(|_| {
            DossierError::ConfigError(
                "ALPHA_VANTAGE_API_KEY environment variable not set".to_string(),
            )
        })?;

        Ok(Self::new(
            api_key,
            5,
            Duration::from_secs(30),
            Arc::new(CacheManager::new(
                Duration::from_secs(60),
                Duration::from_secs(3600),
            )),
        ))
    }

    /// Issue one rate-limited request and screen the payload.
    ///
    /// Alpha Vantage reports problems inside HTTP 200 bodies: an
    /// "Error Message" key for bad requests, a "Note" or "Information"
    /// key when the quota is spent.
    #[instrument(skip(self))]
    async fn fetch(&self, function: &str, symbol: &str) -> Result<Value> {
        self.rate_limiter.until_ready().await;
        debug!("requesting Alpha Vantage");

        let response = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", function),
                ("symbol", symbol),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DossierError::ApiError(format!(
                "Alpha Vantage HTTP error: {}",
                response.status()
            )));
        }

        let data: Value = response.json().await?;

        if let Some(error) = data.get("Error Message") {
            return Err(DossierError::ApiError(error.to_string()));
        }

        if data.get("Note").is_some() || data.get("Information").is_some() {
            return Err(DossierError::RateLimitExceeded {
                provider: "Alpha Vantage".to_string(),
            });
        }

        Ok(data)
    }

    /// Get the company overview (identity, classification, ratios)
    pub async fn get_overview(&self, symbol: &str) -> Result<Value> {
        let key = CacheKey::new(symbol, "overview");
        self.cache
            .fundamental
            .get_or_fetch(key, || self.fetch("OVERVIEW", symbol))
            .await
    }

    /// Get the `annualReports` array from one statement endpoint
    async fn get_annual_reports(&self, function: &str, symbol: &str) -> Result<Vec<Value>> {
        let key = CacheKey::new(symbol, function.to_lowercase());
        let data = self
            .cache
            .fundamental
            .get_or_fetch(key, || self.fetch(function, symbol))
            .await?;

        match data.get("annualReports").and_then(Value::as_array) {
            Some(reports) => Ok(reports.clone()),
            None => Err(DossierError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: format!("no annual reports in {function} response"),
            }),
        }
    }

    /// Get the current global quote
    pub async fn get_quote(&self, symbol: &str) -> Result<Value> {
        let key = CacheKey::new(symbol, "global_quote");
        self.cache
            .quote
            .get_or_fetch(key, || self.fetch("GLOBAL_QUOTE", symbol))
            .await
    }
}

/// Build a [`Ticker`] from an OVERVIEW payload, keeping the defaults
/// for any missing classification field.
fn ticker_from_overview(symbol: &str, overview: &Value) -> Ticker {
    let mut ticker = Ticker::new(symbol);
    if let Some(name) = overview.get("Name").and_then(Value::as_str) {
        ticker.name = name.to_string();
    }
    if let Some(sector) = overview.get("Sector").and_then(Value::as_str) {
        ticker.sector = sector.to_string();
    }
    if let Some(industry) = overview.get("Industry").and_then(Value::as_str) {
        ticker.industry = industry.to_string();
    }
    ticker
}

fn price_from_quote(symbol: &str, quote: &Value) -> Result<Price> {
    let raw = quote
        .get("Global Quote")
        .and_then(|q| q.get("05. price"))
        .and_then(Value::as_str)
        .ok_or_else(|| DossierError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: "quote response carries no price".to_string(),
        })?;

    let amount = raw
        .trim()
        .parse()
        .map_err(|_| DossierError::ApiError(format!("unparseable quote price: {raw}")))?;

    Ok(Price::new(amount, "USD"))
}

#[async_trait]
impl MarketDataProvider for AlphaVantageClient {
    async fn get_ticker_info(&self, symbol: &str) -> Result<Ticker> {
        let overview = self.get_overview(symbol).await?;

        // An unknown symbol comes back as an empty JSON object.
        if overview.as_object().is_none_or(serde_json::Map::is_empty) {
            return Err(DossierError::InvalidSymbol(symbol.to_string()));
        }

        Ok(ticker_from_overview(symbol, &overview))
    }

    async fn get_fundamentals(&self, symbol: &str) -> Result<StockFundamentals> {
        let ticker = self.get_ticker_info(symbol).await?;

        let income = self.get_annual_reports("INCOME_STATEMENT", symbol).await?;
        let balance = self.get_annual_reports("BALANCE_SHEET", symbol).await?;
        let cash = self.get_annual_reports("CASH_FLOW", symbol).await?;

        let fiscal_years = reconcile_fiscal_years(&income, &balance, &cash)?;
        if fiscal_years.is_empty() {
            return Err(DossierError::DataUnavailable {
                symbol: symbol.to_string(),
                reason: "no dated fiscal years in financial statements".to_string(),
            });
        }

        let quote = self.get_quote(symbol).await?;
        let price = price_from_quote(symbol, &quote)?;

        Ok(StockFundamentals {
            ticker,
            price,
            fiscal_years,
        })
    }
}
