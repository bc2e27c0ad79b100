//! Configuration for dossier generation

use crate::error::{DossierError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for dossier generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierConfig {
    /// Alpha Vantage API key
    pub alpha_vantage_api_key: Option<String>,

    /// Gemini API key
    pub gemini_api_key: Option<String>,

    /// Gemini model identifier
    pub gemini_model: String,

    /// Fiscal years of history covered by trend analysis
    pub analysis_years: usize,

    /// Cache TTL for quote data
    pub cache_ttl_quote: Duration,

    /// Cache TTL for fundamental data
    pub cache_ttl_fundamental: Duration,

    /// Request timeout duration
    pub request_timeout: Duration,

    /// Alpha Vantage requests allowed per minute
    pub rate_limit_per_minute: u32,
}

impl Default for DossierConfig {
    fn default() -> Self {
        Self {
            alpha_vantage_api_key: None,
            gemini_api_key: None,
            gemini_model: crate::api::DEFAULT_GEMINI_MODEL.to_string(),
            analysis_years: 10,
            cache_ttl_quote: Duration::from_secs(60),        // 1 minute
            cache_ttl_fundamental: Duration::from_secs(3600), // 1 hour
            request_timeout: Duration::from_secs(30),
            rate_limit_per_minute: 5, // Alpha Vantage free tier
        }
    }
}

impl DossierConfig {
    /// Create a new configuration builder
    pub fn builder() -> DossierConfigBuilder {
        DossierConfigBuilder::default()
    }

    /// Load API keys from environment
    pub fn with_env_api_keys(mut self) -> Self {
        if let Ok(key) = std::env::var("ALPHA_VANTAGE_API_KEY") {
            self.alpha_vantage_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(key);
        }
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.alpha_vantage_api_key.is_none() {
            return Err(DossierError::ConfigError(
                "Alpha Vantage API key is required".to_string(),
            ));
        }

        if self.gemini_api_key.is_none() {
            return Err(DossierError::ConfigError(
                "Gemini API key is required".to_string(),
            ));
        }

        if self.analysis_years == 0 {
            return Err(DossierError::ConfigError(
                "analysis_years must be greater than 0".to_string(),
            ));
        }

        if self.rate_limit_per_minute == 0 {
            return Err(DossierError::ConfigError(
                "rate_limit_per_minute must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for DossierConfig
#[derive(Debug, Default)]
pub struct DossierConfigBuilder {
    alpha_vantage_api_key: Option<String>,
    gemini_api_key: Option<String>,
    gemini_model: Option<String>,
    analysis_years: Option<usize>,
    cache_ttl_quote: Option<Duration>,
    cache_ttl_fundamental: Option<Duration>,
    request_timeout: Option<Duration>,
    rate_limit_per_minute: Option<u32>,
}

impl DossierConfigBuilder {
    /// Set the Alpha Vantage API key
    pub fn alpha_vantage_api_key(mut self, key: impl Into<String>) -> Self {
        self.alpha_vantage_api_key = Some(key.into());
        self
    }

    /// Set the Gemini API key
    pub fn gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// Set the Gemini model identifier
    pub fn gemini_model(mut self, model: impl Into<String>) -> Self {
        self.gemini_model = Some(model.into());
        self
    }

    /// Set the trend analysis window in fiscal years
    pub fn analysis_years(mut self, years: usize) -> Self {
        self.analysis_years = Some(years);
        self
    }

    /// Set cache TTL for quote data
    pub fn cache_ttl_quote(mut self, duration: Duration) -> Self {
        self.cache_ttl_quote = Some(duration);
        self
    }

    /// Set cache TTL for fundamental data
    pub fn cache_ttl_fundamental(mut self, duration: Duration) -> Self {
        self.cache_ttl_fundamental = Some(duration);
        self
    }

    /// Set request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Set the Alpha Vantage per-minute request budget
    pub fn rate_limit_per_minute(mut self, limit: u32) -> Self {
        self.rate_limit_per_minute = Some(limit);
        self
    }

    /// Load API keys from environment
    pub fn with_env_api_keys(mut self) -> Self {
        if let Ok(key) = std::env::var("ALPHA_VANTAGE_API_KEY") {
            self.alpha_vantage_api_key = Some(key);
        }
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(key);
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DossierConfig> {
        let defaults = DossierConfig::default();

        let config = DossierConfig {
            alpha_vantage_api_key: self.alpha_vantage_api_key,
            gemini_api_key: self.gemini_api_key,
            gemini_model: self.gemini_model.unwrap_or(defaults.gemini_model),
            analysis_years: self.analysis_years.unwrap_or(defaults.analysis_years),
            cache_ttl_quote: self.cache_ttl_quote.unwrap_or(defaults.cache_ttl_quote),
            cache_ttl_fundamental: self
                .cache_ttl_fundamental
                .unwrap_or(defaults.cache_ttl_fundamental),
            request_timeout: self.request_timeout.unwrap_or(defaults.request_timeout),
            rate_limit_per_minute: self
                .rate_limit_per_minute
                .unwrap_or(defaults.rate_limit_per_minute),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DossierConfig::default();
        assert_eq!(config.analysis_years, 10);
        assert_eq!(config.rate_limit_per_minute, 5);
        // Defaults carry no keys and fail validation until keys arrive.
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = DossierConfig::builder()
            .alpha_vantage_api_key("av_key")
            .gemini_api_key("gem_key")
            .analysis_years(5)
            .request_timeout(Duration::from_secs(60))
            .build()
            .unwrap();

        assert_eq!(config.analysis_years, 5);
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_validation_requires_both_keys() {
        let missing_gemini = DossierConfig {
            alpha_vantage_api_key: Some("av_key".to_string()),
            ..Default::default()
        };
        assert!(missing_gemini.validate().is_err());

        let missing_alpha = DossierConfig {
            gemini_api_key: Some("gem_key".to_string()),
            ..Default::default()
        };
        assert!(missing_alpha.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_window() {
        let config = DossierConfig {
            alpha_vantage_api_key: Some("av_key".to_string()),
            gemini_api_key: Some("gem_key".to_string()),
            analysis_years: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
