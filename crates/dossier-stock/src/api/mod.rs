//! Upstream API clients.

mod alpha_vantage;
mod gemini;

pub use alpha_vantage::AlphaVantageClient;
pub use gemini::{GeminiClient, DEFAULT_GEMINI_MODEL};
