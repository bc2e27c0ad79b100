//! Prompt builders for the narrative provider.
//!
//! Each prompt demands a bare JSON object whose keys match a domain
//! struct exactly, so the response can be deserialized without repair.

/// Prompt requesting a structured company research profile.
pub fn company_profile(symbol: &str) -> String {
    format!(
        r#"You are an equity research analyst. Research the publicly traded company with ticker symbol "{symbol}" and respond with a single JSON object and nothing else. No markdown, no code fences, no commentary before or after.

The JSON object must have exactly these keys:
{{
  "business_description": "What the company does, in plain language",
  "company_history": "Founding, major milestones, pivots",
  "ceo_name": "Current CEO full name",
  "ceo_ownership": 0.0,
  "major_shareholders": {{"shareholder name": 0.0}},
  "revenue_model": "How the company earns money",
  "strategy": "Stated strategic direction and capital allocation",
  "products_services": {{"product or service": "short description"}},
  "competitive_advantage": "Durable advantages, if any",
  "competitors": {{"competitor name": "how they compete"}},
  "management_insights": "Assessment of management quality and incentives",
  "risk_factors": {{"risk": "why it matters"}},
  "historical_context_crises": "How the company fared in past downturns"
}}

Ownership figures are percentages as plain numbers (5.2 means 5.2%). If a fact is unknown, use an empty string or empty object rather than inventing one."#
    )
}

/// Prompt requesting a Porter five-forces industry breakdown.
pub fn industry_dynamics(sector: &str, industry: &str) -> String {
    format!(
        r#"You are an equity research analyst. Analyse the competitive structure of the "{industry}" industry within the "{sector}" sector. Respond with a single JSON object and nothing else. No markdown, no code fences, no commentary before or after.

The JSON object must have exactly these keys:
{{
  "sector": "{sector}",
  "industry": "{industry}",
  "rivalry_among_competitors": {{"aspect": "assessment"}},
  "bargaining_power_of_suppliers": {{"aspect": "assessment"}},
  "bargaining_power_of_customers": {{"aspect": "assessment"}},
  "threat_of_new_entrants": {{"aspect": "assessment"}},
  "threat_of_obsolescence": {{"aspect": "assessment"}},
  "economic_sensitivity": "How demand moves with the economic cycle",
  "interest_rate_exposure": "How rates affect the industry's economics"
}}

Ground every assessment in industry structure, not individual companies."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_prompt_names_symbol_and_keys() {
        let prompt = company_profile("AAPL");
        assert!(prompt.contains("\"AAPL\""));
        assert!(prompt.contains("business_description"));
        assert!(prompt.contains("historical_context_crises"));
        assert!(prompt.contains("nothing else"));
    }

    #[test]
    fn test_industry_prompt_names_classification() {
        let prompt = industry_dynamics("Technology", "Semiconductors");
        assert!(prompt.contains("\"Semiconductors\""));
        assert!(prompt.contains("\"Technology\""));
        assert!(prompt.contains("threat_of_new_entrants"));
    }
}
