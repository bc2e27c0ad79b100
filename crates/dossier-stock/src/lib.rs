//! Investment research dossier engine
//!
//! This crate builds a three-section research dossier for a stock
//! ticker:
//!
//! - Quantitative: annual financial statements from Alpha Vantage,
//!   reconciled across income statement, balance sheet and cash flow,
//!   with a per-metric CAGR trend analysis in exact decimal arithmetic
//! - Qualitative: a structured company profile from a narrative model
//! - Sector: a Porter five-forces breakdown of the company's industry
//!
//! The analysis services depend only on the [`domain::MarketDataProvider`]
//! and [`domain::NarrativeProvider`] traits; the [`api`] module supplies
//! the Alpha Vantage and Gemini implementations.
//!
//! # Example
//!
//! ```rust,ignore
//! use dossier_stock::analysis::QuantitativeAnalysis;
//! use dossier_stock::api::AlphaVantageClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(AlphaVantageClient::from_env()?);
//!     let analysis = QuantitativeAnalysis::new(client);
//!
//!     let report = analysis.evaluate_ticker("AAPL", 10).await?;
//!     println!("{}", dossier_stock::report::format_quantitative(&report));
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod api;
pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod prompts;
pub mod quant;
pub mod report;

pub use config::DossierConfig;
pub use error::{DossierError, Result};
