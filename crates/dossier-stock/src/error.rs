//! Error types for dossier operations

use thiserror::Error;

/// Dossier-specific errors
#[derive(Debug, Error)]
pub enum DossierError {
    /// A fiscal year could not be reconciled across the three statements
    #[error("Data integrity error: {0}")]
    DataIntegrity(String),

    /// API request failed
    #[error("API error: {0}")]
    ApiError(String),

    /// Invalid stock symbol provided
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Data not available for the requested symbol
    #[error("Data not available for {symbol}: {reason}")]
    DataUnavailable {
        symbol: String,
        reason: String,
    },

    /// Rate limit exceeded for a provider
    #[error("Rate limit exceeded for {provider}")]
    RateLimitExceeded {
        provider: String,
    },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for dossier operations
pub type Result<T> = std::result::Result<T, DossierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DossierError::InvalidSymbol("INVALID".to_string());
        assert_eq!(err.to_string(), "Invalid symbol: INVALID");

        let err = DossierError::DataUnavailable {
            symbol: "AAPL".to_string(),
            reason: "No fundamental data".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Data not available for AAPL: No fundamental data"
        );

        let err = DossierError::RateLimitExceeded {
            provider: "Alpha Vantage".to_string(),
        };
        assert_eq!(err.to_string(), "Rate limit exceeded for Alpha Vantage");
    }

    #[test]
    fn test_data_integrity_names_the_date() {
        let err = DossierError::DataIntegrity(
            "Missing data on date: 2023-12-31. Balance: MISSING, CashFlow: OK".to_string(),
        );
        let message = err.to_string();
        assert!(message.contains("2023-12-31"));
        assert!(message.contains("Balance: MISSING"));
    }
}
