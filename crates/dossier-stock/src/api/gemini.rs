//! Google Gemini provider implementation
//!
//! Implements the NarrativeProvider trait over the Gemini
//! generateContent endpoint.
//! See: https://ai.google.dev/api/generate-content

use crate::domain::{CompanyProfile, IndustryDynamics, NarrativeProvider};
use crate::error::{DossierError, Result};
use crate::prompts;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gemini model for narrative analysis
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Google Gemini narrative provider
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable
    /// with the default model.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            DossierError::ConfigError("GEMINI_API_KEY environment variable not set".to_string())
        })?;
        Self::new(api_key, DEFAULT_GEMINI_MODEL)
    }

    /// Send one prompt and return the raw text of the first candidate.
    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: String) -> Result<String> {
        debug!(model = %self.model, "sending request to Gemini API");

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(format!(
                "{GEMINI_API_BASE}/models/{}:generateContent",
                self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;

            return Err(match status.as_u16() {
                401 | 403 => {
                    DossierError::ConfigError("Gemini rejected the API key".to_string())
                }
                429 => DossierError::RateLimitExceeded {
                    provider: "Gemini".to_string(),
                },
                _ => DossierError::ApiError(format!("Gemini HTTP {status}: {error_text}")),
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| {
                DossierError::ApiError("Gemini response carried no candidates".to_string())
            })?;

        Ok(text)
    }

    /// Run a prompt and deserialize the response body as `T`.
    async fn generate_json<T: serde::de::DeserializeOwned>(&self, prompt: String) -> Result<T> {
        let raw = self.generate(prompt).await?;
        let stripped = strip_fences(&raw);
        Ok(serde_json::from_str(stripped)?)
    }
}

/// Remove a surrounding ```json ... ``` fence if the model added one
/// despite being told not to.
fn strip_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

#[async_trait]
impl NarrativeProvider for GeminiClient {
    async fn analyse_company(&self, symbol: &str) -> Result<CompanyProfile> {
        self.generate_json(prompts::company_profile(symbol)).await
    }

    async fn analyse_industry(&self, sector: &str, industry: &str) -> Result<IndustryDynamics> {
        self.generate_json(prompts::industry_dynamics(sector, industry))
            .await
    }
}

// Request/response types matching the Gemini wire format exactly.

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}
